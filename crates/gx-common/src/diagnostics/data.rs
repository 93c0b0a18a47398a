//! Diagnostic code and message table.
//!
//! Codes are grouped by phase: 1xxx lexical/syntactic, 2xxx semantic.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    // Scanner
    pub const INVALID_CHARACTER: u32 = 1001;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const DIGIT_EXPECTED: u32 = 1124;
    pub const HEXADECIMAL_DIGIT_EXPECTED: u32 = 1125;
    pub const BINARY_DIGIT_EXPECTED: u32 = 1177;
    pub const OCTAL_DIGIT_EXPECTED: u32 = 1178;
    pub const NUMERIC_LITERAL_TOO_LARGE: u32 = 1179;
    pub const NON_ASCII_CHARACTER_IN_STRING: u32 = 1200;
    pub const INVALID_ESCAPE_SEQUENCE: u32 = 1201;

    // Parser
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const TOKEN_EXPECTED: u32 = 1005;
    pub const EXPRESSION_EXPECTED: u32 = 1109;
    pub const TYPE_EXPECTED: u32 = 1110;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const STATEMENT_EXPECTED: u32 = 1129;
    pub const PROPERTY_DECLARATION_EXPECTED: u32 = 1131;
    pub const PARAMETER_DECLARATION_EXPECTED: u32 = 1138;
    pub const UNEXPECTED_TOKEN: u32 = 1012;
    pub const MODIFIER_NOT_ALLOWED: u32 = 1042;
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: u32 = 1099;
    pub const BREAK_OUTSIDE_LOOP: u32 = 1105;
    pub const CONTINUE_OUTSIDE_LOOP: u32 = 1104;
    pub const CONST_MUST_BE_INITIALIZED: u32 = 1155;

    // Binder
    pub const DUPLICATE_IDENTIFIER: u32 = 2300;

    // Checker
    pub const CANNOT_FIND_NAME: u32 = 2304;
    pub const TYPE_NOT_ASSIGNABLE: u32 = 2322;
    pub const UNDECLARED_PROPERTY: u32 = 2339;
    pub const NOT_CALLABLE: u32 = 2349;
    pub const OPERATOR_CANNOT_BE_APPLIED_TO_TYPES: u32 = 2365;
    pub const OPERATOR_CANNOT_BE_APPLIED_TO_TYPE: u32 = 2362;
    pub const INVALID_ASSIGNMENT_TARGET: u32 = 2364;
    pub const CONDITION_NOT_BOOLEAN: u32 = 2366;
    pub const MISSING_RETURN_VALUE: u32 = 2355;
    pub const VOID_FUNCTION_RETURNS_VALUE: u32 = 2408;
    pub const ARGUMENT_COUNT_MISMATCH: u32 = 2554;
    pub const CANNOT_ASSIGN_TO_CONSTANT: u32 = 2588;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes as c};

    const fn error(code: u32, message: &'static str) -> DiagnosticMessage {
        DiagnosticMessage {
            code,
            category: DiagnosticCategory::Error,
            message,
        }
    }

    const fn warning(code: u32, message: &'static str) -> DiagnosticMessage {
        DiagnosticMessage {
            code,
            category: DiagnosticCategory::Warning,
            message,
        }
    }

    pub const INVALID_CHARACTER: DiagnosticMessage = error(c::INVALID_CHARACTER, "Invalid character.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
        error(c::UNTERMINATED_STRING_LITERAL, "Unterminated string literal.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = error(c::DIGIT_EXPECTED, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage =
        error(c::HEXADECIMAL_DIGIT_EXPECTED, "Hexadecimal digit expected.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage =
        error(c::BINARY_DIGIT_EXPECTED, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage =
        error(c::OCTAL_DIGIT_EXPECTED, "Octal digit expected.");
    pub const NUMERIC_LITERAL_TOO_LARGE: DiagnosticMessage = error(
        c::NUMERIC_LITERAL_TOO_LARGE,
        "Numeric literal is too large to be represented.",
    );
    pub const NON_ASCII_CHARACTER_IN_STRING: DiagnosticMessage = warning(
        c::NON_ASCII_CHARACTER_IN_STRING,
        "Non-ASCII character in string literal.",
    );
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage =
        warning(c::INVALID_ESCAPE_SEQUENCE, "Invalid escape sequence '\\{0}'.");

    pub const IDENTIFIER_EXPECTED: DiagnosticMessage =
        error(c::IDENTIFIER_EXPECTED, "Identifier expected.");
    pub const TOKEN_EXPECTED: DiagnosticMessage = error(c::TOKEN_EXPECTED, "'{0}' expected.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage =
        error(c::EXPRESSION_EXPECTED, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = error(c::TYPE_EXPECTED, "Type expected.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = error(
        c::DECLARATION_OR_STATEMENT_EXPECTED,
        "Declaration or statement expected.",
    );
    pub const STATEMENT_EXPECTED: DiagnosticMessage =
        error(c::STATEMENT_EXPECTED, "Statement expected.");
    pub const PROPERTY_DECLARATION_EXPECTED: DiagnosticMessage =
        error(c::PROPERTY_DECLARATION_EXPECTED, "Property declaration expected.");
    pub const PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = error(
        c::PARAMETER_DECLARATION_EXPECTED,
        "Parameter declaration expected.",
    );
    pub const UNEXPECTED_TOKEN: DiagnosticMessage =
        error(c::UNEXPECTED_TOKEN, "Unexpected token '{0}'.");
    pub const MODIFIER_NOT_ALLOWED: DiagnosticMessage = error(
        c::MODIFIER_NOT_ALLOWED,
        "'{0}' modifier cannot be used here.",
    );
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage = error(
        c::MAXIMUM_NESTING_DEPTH_EXCEEDED,
        "Maximum nesting depth exceeded.",
    );
    pub const BREAK_OUTSIDE_LOOP: DiagnosticMessage = error(
        c::BREAK_OUTSIDE_LOOP,
        "A 'break' statement can only be used within an enclosing loop.",
    );
    pub const CONTINUE_OUTSIDE_LOOP: DiagnosticMessage = error(
        c::CONTINUE_OUTSIDE_LOOP,
        "A 'continue' statement can only be used within an enclosing loop.",
    );
    pub const CONST_MUST_BE_INITIALIZED: DiagnosticMessage =
        error(c::CONST_MUST_BE_INITIALIZED, "Constant '{0}' must be initialized.");

    pub const DUPLICATE_IDENTIFIER: DiagnosticMessage =
        error(c::DUPLICATE_IDENTIFIER, "Duplicate identifier '{0}'.");

    pub const CANNOT_FIND_NAME: DiagnosticMessage =
        error(c::CANNOT_FIND_NAME, "Cannot find name '{0}'.");
    pub const TYPE_NOT_ASSIGNABLE: DiagnosticMessage = error(
        c::TYPE_NOT_ASSIGNABLE,
        "Type '{0}' is not assignable to type '{1}'.",
    );
    pub const UNDECLARED_PROPERTY: DiagnosticMessage = error(
        c::UNDECLARED_PROPERTY,
        "Use of undeclared property '{0}' on type '{1}'.",
    );
    pub const NOT_CALLABLE: DiagnosticMessage =
        error(c::NOT_CALLABLE, "Type '{0}' is not callable.");
    pub const OPERATOR_CANNOT_BE_APPLIED_TO_TYPES: DiagnosticMessage = error(
        c::OPERATOR_CANNOT_BE_APPLIED_TO_TYPES,
        "Operator '{0}' cannot be applied to types '{1}' and '{2}'.",
    );
    pub const OPERATOR_CANNOT_BE_APPLIED_TO_TYPE: DiagnosticMessage = error(
        c::OPERATOR_CANNOT_BE_APPLIED_TO_TYPE,
        "Operator '{0}' cannot be applied to type '{1}'.",
    );
    pub const INVALID_ASSIGNMENT_TARGET: DiagnosticMessage = error(
        c::INVALID_ASSIGNMENT_TARGET,
        "The left-hand side of an assignment must be a variable, property or element access.",
    );
    pub const CONDITION_NOT_BOOLEAN: DiagnosticMessage = error(
        c::CONDITION_NOT_BOOLEAN,
        "Condition must be a boolean expression, got '{0}'.",
    );
    pub const MISSING_RETURN_VALUE: DiagnosticMessage = error(
        c::MISSING_RETURN_VALUE,
        "A function whose declared type is '{0}' must return a value.",
    );
    pub const VOID_FUNCTION_RETURNS_VALUE: DiagnosticMessage = error(
        c::VOID_FUNCTION_RETURNS_VALUE,
        "A 'void' function cannot return a value.",
    );
    pub const ARGUMENT_COUNT_MISMATCH: DiagnosticMessage = error(
        c::ARGUMENT_COUNT_MISMATCH,
        "Invalid number of arguments: expected {0} arguments, got {1}.",
    );
    pub const CANNOT_ASSIGN_TO_CONSTANT: DiagnosticMessage = error(
        c::CANNOT_ASSIGN_TO_CONSTANT,
        "Cannot assign to '{0}' because it is a constant.",
    );
}

use diagnostic_messages as m;

/// Every known message, for lookup by code.
pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    m::INVALID_CHARACTER,
    m::UNTERMINATED_STRING_LITERAL,
    m::DIGIT_EXPECTED,
    m::HEXADECIMAL_DIGIT_EXPECTED,
    m::BINARY_DIGIT_EXPECTED,
    m::OCTAL_DIGIT_EXPECTED,
    m::NUMERIC_LITERAL_TOO_LARGE,
    m::NON_ASCII_CHARACTER_IN_STRING,
    m::INVALID_ESCAPE_SEQUENCE,
    m::IDENTIFIER_EXPECTED,
    m::TOKEN_EXPECTED,
    m::EXPRESSION_EXPECTED,
    m::TYPE_EXPECTED,
    m::DECLARATION_OR_STATEMENT_EXPECTED,
    m::STATEMENT_EXPECTED,
    m::PROPERTY_DECLARATION_EXPECTED,
    m::PARAMETER_DECLARATION_EXPECTED,
    m::UNEXPECTED_TOKEN,
    m::MODIFIER_NOT_ALLOWED,
    m::MAXIMUM_NESTING_DEPTH_EXCEEDED,
    m::BREAK_OUTSIDE_LOOP,
    m::CONTINUE_OUTSIDE_LOOP,
    m::CONST_MUST_BE_INITIALIZED,
    m::DUPLICATE_IDENTIFIER,
    m::CANNOT_FIND_NAME,
    m::TYPE_NOT_ASSIGNABLE,
    m::UNDECLARED_PROPERTY,
    m::NOT_CALLABLE,
    m::OPERATOR_CANNOT_BE_APPLIED_TO_TYPES,
    m::OPERATOR_CANNOT_BE_APPLIED_TO_TYPE,
    m::INVALID_ASSIGNMENT_TARGET,
    m::CONDITION_NOT_BOOLEAN,
    m::MISSING_RETURN_VALUE,
    m::VOID_FUNCTION_RETURNS_VALUE,
    m::ARGUMENT_COUNT_MISMATCH,
    m::CANNOT_ASSIGN_TO_CONSTANT,
];

use crate::parser::node_flags;
use crate::parser::syntax_kind_ext::*;
use crate::parser::{NodeIndex, ParserState};
use gx_common::diagnostics::diagnostic_codes;
use gx_scanner::SyntaxKind;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.galaxy".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn statements(parser: &ParserState, root: NodeIndex) -> Vec<NodeIndex> {
    parser
        .get_arena()
        .get_source_file_at(root)
        .map(|data| data.statements.nodes.clone())
        .unwrap_or_default()
}

fn codes(parser: &ParserState) -> Vec<u32> {
    parser.get_diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn test_variable_with_binary_initializer() {
    let (parser, root) = parse("int x = 1 + 2;");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();

    let stmts = statements(&parser, root);
    assert_eq!(stmts.len(), 1);
    let var_node = arena.get(stmts[0]).unwrap();
    assert_eq!(var_node.kind, VARIABLE_DECLARATION);
    assert_eq!((var_node.pos, var_node.end), (0, 14));

    let var = arena.get_variable(var_node).unwrap();
    assert_eq!(arena.get_identifier_text(var.name), Some("x"));

    let type_ref = arena.get_type_ref(arena.get(var.type_node).unwrap()).unwrap();
    assert_eq!(arena.kind(type_ref.type_name), Some(SyntaxKind::IntKeyword as u16));

    let init = arena.get(var.initializer).unwrap();
    assert_eq!(init.kind, BINARY_EXPRESSION);
    let binary = arena.get_binary_expr(init).unwrap();
    assert_eq!(binary.operator_token, SyntaxKind::PlusToken as u16);
    let left = arena.get_literal(arena.get(binary.left).unwrap()).unwrap();
    let right = arena.get_literal(arena.get(binary.right).unwrap()).unwrap();
    assert_eq!(left.text, "1");
    assert_eq!(right.text, "2");
}

#[test]
fn test_syntax_tokens_belong_to_innermost_node() {
    let (parser, root) = parse("int x = 1 + 2;");
    let arena = parser.get_arena();
    let var_idx = statements(&parser, root)[0];
    let kinds: Vec<SyntaxKind> = arena.syntax_tokens(var_idx).iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![SyntaxKind::EqualsToken, SyntaxKind::SemicolonToken]);

    let var = arena.get_variable(arena.get(var_idx).unwrap()).unwrap();
    let kinds: Vec<SyntaxKind> = arena
        .syntax_tokens(var.initializer)
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, vec![SyntaxKind::PlusToken]);
}

#[test]
fn test_if_statement_tokens() {
    let (parser, root) = parse("void f() { if (a) b(); else c(); }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let func = arena.get_function(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();
    let block = arena.get_block(arena.get(func.body).unwrap()).unwrap();
    let if_idx = block.statements.nodes[0];
    assert_eq!(arena.kind(if_idx), Some(IF_STATEMENT));
    let kinds: Vec<SyntaxKind> = arena.syntax_tokens(if_idx).iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IfKeyword,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::ElseKeyword,
        ]
    );
}

#[test]
fn test_function_declaration() {
    let (parser, root) = parse("int f(int a, int b) { return a; }");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let func_node = arena.get(statements(&parser, root)[0]).unwrap();
    assert_eq!(func_node.kind, FUNCTION_DECLARATION);
    let func = arena.get_function(func_node).unwrap();
    assert_eq!(arena.get_identifier_text(func.name), Some("f"));
    assert_eq!(func.parameters.len(), 2);
    for (param, name) in func.parameters.nodes.iter().zip(["a", "b"]) {
        assert_eq!(arena.kind(*param), Some(PARAMETER_DECLARATION));
        assert_eq!(arena.get_identifier_text(arena.get_declaration_name(*param)), Some(name));
    }
    let block = arena.get_block(arena.get(func.body).unwrap()).unwrap();
    assert_eq!(block.statements.len(), 1);
    assert_eq!(arena.kind(block.statements.nodes[0]), Some(RETURN_STATEMENT));
}

#[test]
fn test_function_prototype_has_no_body() {
    let (parser, root) = parse("native void UIDisplayMessage(string s);");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let node = arena.get(statements(&parser, root)[0]).unwrap();
    assert!(node.has_flag(node_flags::NATIVE));
    let func = arena.get_function(node).unwrap();
    assert!(func.body.is_none());
    assert_eq!(func.modifiers.as_ref().map(|m| m.len()), Some(1));
}

#[test]
fn test_local_declaration_versus_expression_statement() {
    let (parser, root) = parse("void main() { S s; s.b = 1; a[1] = 2; }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let func = arena.get_function(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();
    let block = arena.get_block(arena.get(func.body).unwrap()).unwrap();
    let kinds: Vec<Option<u16>> = block.statements.nodes.iter().map(|&n| arena.kind(n)).collect();
    assert_eq!(
        kinds,
        vec![
            Some(VARIABLE_DECLARATION),
            Some(EXPRESSION_STATEMENT),
            Some(EXPRESSION_STATEMENT),
        ]
    );

    let stmt = arena
        .get_expression_statement(arena.get(block.statements.nodes[1]).unwrap())
        .unwrap();
    let assign = arena.get_binary_expr(arena.get(stmt.expression).unwrap()).unwrap();
    assert_eq!(assign.operator_token, SyntaxKind::EqualsToken as u16);
    assert_eq!(arena.kind(assign.left), Some(PROPERTY_ACCESS_EXPRESSION));
}

#[test]
fn test_binary_precedence_and_associativity() {
    let (parser, root) = parse("int x = 1 - 2 - 3 * 4;");
    let arena = parser.get_arena();
    let var = arena.get_variable(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();

    // ((1 - 2) - (3 * 4))
    let outer = arena.get_binary_expr(arena.get(var.initializer).unwrap()).unwrap();
    assert_eq!(outer.operator_token, SyntaxKind::MinusToken as u16);
    let left = arena.get_binary_expr(arena.get(outer.left).unwrap()).unwrap();
    assert_eq!(left.operator_token, SyntaxKind::MinusToken as u16);
    let right = arena.get_binary_expr(arena.get(outer.right).unwrap()).unwrap();
    assert_eq!(right.operator_token, SyntaxKind::AsteriskToken as u16);
}

#[test]
fn test_assignment_is_right_associative() {
    let (parser, root) = parse("void f() { a = b = c; }");
    let arena = parser.get_arena();
    let func = arena.get_function(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();
    let block = arena.get_block(arena.get(func.body).unwrap()).unwrap();
    let stmt = arena
        .get_expression_statement(arena.get(block.statements.nodes[0]).unwrap())
        .unwrap();
    let outer = arena.get_binary_expr(arena.get(stmt.expression).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(outer.left), Some("a"));
    let inner = arena.get_binary_expr(arena.get(outer.right).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(inner.left), Some("b"));
    assert_eq!(arena.get_identifier_text(inner.right), Some("c"));
}

#[test]
fn test_postfix_chain() {
    let (parser, root) = parse("void f() { a.b[1](2)++; }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let func = arena.get_function(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();
    let block = arena.get_block(arena.get(func.body).unwrap()).unwrap();
    let stmt = arena
        .get_expression_statement(arena.get(block.statements.nodes[0]).unwrap())
        .unwrap();

    let postfix = arena.get(stmt.expression).unwrap();
    assert_eq!(postfix.kind, POSTFIX_UNARY_EXPRESSION);
    let call_idx = arena.get_unary_expr(postfix).unwrap().operand;
    assert_eq!(arena.kind(call_idx), Some(CALL_EXPRESSION));
    let call = arena.get_call_expr(arena.get(call_idx).unwrap()).unwrap();
    assert_eq!(call.arguments.len(), 1);
    assert_eq!(arena.kind(call.expression), Some(ELEMENT_ACCESS_EXPRESSION));
    let element = arena.get_access_expr(arena.get(call.expression).unwrap()).unwrap();
    assert_eq!(arena.kind(element.expression), Some(PROPERTY_ACCESS_EXPRESSION));
}

#[test]
fn test_struct_and_typedef() {
    let (parser, root) = parse("struct S { int a; string b; };\ntypedef S T;");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let stmts = statements(&parser, root);
    let s = arena.get_struct(arena.get(stmts[0]).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(s.name), Some("S"));
    assert_eq!(s.members.len(), 2);
    assert!(
        s.members
            .nodes
            .iter()
            .all(|&m| arena.kind(m) == Some(PROPERTY_DECLARATION))
    );
    assert_eq!(arena.kind(stmts[1]), Some(TYPEDEF_DECLARATION));
}

#[test]
fn test_mapped_and_array_types() {
    let (parser, root) = parse("funcref<f> g;\nint[5][2] grid;");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let stmts = statements(&parser, root);

    let g = arena.get_declared_type(stmts[0]);
    let mapped = arena.get_mapped_type(arena.get(g).unwrap()).unwrap();
    assert_eq!(arena.kind(mapped.type_name), Some(SyntaxKind::FuncrefKeyword as u16));
    assert_eq!(mapped.type_arguments.len(), 1);

    // int[5][2]: outer array wraps the inner one
    let grid = arena.get_declared_type(stmts[1]);
    let outer = arena.get_array_type(arena.get(grid).unwrap()).unwrap();
    let inner = arena.get_array_type(arena.get(outer.element_type).unwrap()).unwrap();
    assert_eq!(arena.kind(inner.element_type), Some(TYPE_REFERENCE));
    assert_eq!(arena.get_literal(arena.get(inner.size).unwrap()).unwrap().text, "5");
}

#[test]
fn test_include_without_semicolon() {
    let (parser, root) = parse("include \"TriggerLibs/NativeLib\"\nint x;");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let stmts = statements(&parser, root);
    assert_eq!(stmts.len(), 2);
    let include = arena.get_include(arena.get(stmts[0]).unwrap()).unwrap();
    let path = arena.get_literal(arena.get(include.path).unwrap()).unwrap();
    assert_eq!(path.text, "TriggerLibs/NativeLib");
}

#[test]
fn test_modifier_flags() {
    let (parser, root) = parse("static const int x = 1;");
    assert!(parser.get_diagnostics().is_empty());
    let node = parser.get_arena().get(statements(&parser, root)[0]).unwrap();
    assert!(node.has_flag(node_flags::STATIC));
    assert!(node.has_flag(node_flags::CONST));
    assert!(!node.has_flag(node_flags::NATIVE));
}

#[test]
fn test_duplicate_modifier_reported() {
    let (parser, _) = parse("static static int x;");
    assert_eq!(codes(&parser), vec![diagnostic_codes::MODIFIER_NOT_ALLOWED]);
}

#[test]
fn test_missing_semicolon() {
    let (parser, _) = parse("int x = 1");
    let diags = parser.get_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, diagnostic_codes::TOKEN_EXPECTED);
    assert_eq!(diags[0].message, "';' expected.");
}

#[test]
fn test_missing_expression_creates_missing_node() {
    let (parser, root) = parse("int x = ;");
    assert_eq!(codes(&parser), vec![diagnostic_codes::EXPRESSION_EXPECTED]);
    let arena = parser.get_arena();
    let var = arena.get_variable(arena.get(statements(&parser, root)[0]).unwrap()).unwrap();
    assert!(var.initializer.is_some());
    assert!(arena.is_missing(var.initializer));
    let missing = arena.get(var.initializer).unwrap();
    assert_eq!(missing.pos, missing.end);
}

#[test]
fn test_unexpected_token_is_skipped() {
    let (parser, root) = parse("int x; } int y;");
    assert_eq!(
        codes(&parser),
        vec![diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED]
    );
    assert_eq!(statements(&parser, root).len(), 2);
}

#[test]
fn test_trailing_comma_in_arguments() {
    let (parser, _) = parse("void f() { g(1,); }");
    assert_eq!(codes(&parser), vec![diagnostic_codes::UNEXPECTED_TOKEN]);
}

#[test]
fn test_scanner_diagnostics_are_merged_in_order() {
    let (parser, _) = parse("int x = @;\nstring s = \"abc");
    let diags = parser.get_diagnostics();
    assert!(diags.iter().any(|d| d.code == diagnostic_codes::INVALID_CHARACTER));
    assert!(
        diags
            .iter()
            .any(|d| d.code == diagnostic_codes::UNTERMINATED_STRING_LITERAL)
    );
    assert!(diags.windows(2).all(|w| w[0].start <= w[1].start));
}

#[test]
fn test_look_ahead_always_restores() {
    let mut parser = ParserState::new("test.galaxy".to_string(), "S s = 1;".to_string());
    parser.next_token();
    let nodes_before = parser.get_arena().len();
    let diags_before = parser.get_diagnostics().len();

    let is_declaration = parser.look_ahead(|p| {
        p.parse_type();
        p.is_token(SyntaxKind::Identifier)
    });

    assert!(is_declaration);
    assert_eq!(parser.get_arena().len(), nodes_before);
    assert_eq!(parser.get_diagnostics().len(), diags_before);
    assert!(parser.is_token(SyntaxKind::Identifier));
    assert_eq!(parser.token_pos(), 0);
}

#[test]
fn test_try_parse_restores_only_on_none() {
    let mut parser = ParserState::new("test.galaxy".to_string(), "a b".to_string());
    parser.next_token();

    let failed: Option<()> = parser.try_parse(|p| {
        p.parse_identifier();
        None
    });
    assert!(failed.is_none());
    assert_eq!(parser.token_pos(), 0);

    let kept = parser.try_parse(|p| Some(p.parse_identifier()));
    assert!(kept.is_some());
    assert_eq!(parser.token_pos(), 2);
}

#[test]
fn test_deep_nesting_reports_instead_of_overflowing() {
    let depth = 2_000;
    let source = format!("int x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(move || {
            let (parser, _) = parse(&source);
            codes(&parser)
        })
        .unwrap();
    let codes = handle.join().unwrap();
    assert!(codes.contains(&diagnostic_codes::MAXIMUM_NESTING_DEPTH_EXCEEDED));
}

#[test]
fn test_parent_links() {
    let (parser, root) = parse("int x = 1;");
    let arena = parser.get_arena();
    let var_idx = statements(&parser, root)[0];
    let var = arena.get_variable(arena.get(var_idx).unwrap()).unwrap();
    assert_eq!(arena.parent(var_idx), root);
    assert_eq!(arena.parent(var.initializer), var_idx);
    assert_eq!(arena.parent(var.name), var_idx);
    assert!(arena.parent(root).is_none());
}

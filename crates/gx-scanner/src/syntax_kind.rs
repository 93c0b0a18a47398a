//! Token kinds and the text tables built from them.
//!
//! Every punctuation and keyword kind carries its source text, so
//! `token_to_string` and `string_to_token` are generated from one list and
//! cannot drift apart.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

macro_rules! syntax_kinds {
    ($( $(#[$meta:meta])* $name:ident $(= $text:literal)? ),+ $(,)?) => {
        /// Token kinds produced by the scanner.
        ///
        /// AST node kinds continue above these values in `gx_parser::syntax_kind_ext`.
        #[repr(u16)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum SyntaxKind {
            $( $(#[$meta])* $name, )+
        }

        impl SyntaxKind {
            /// Every kind in discriminant order.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$name),+];

            /// Fixed source text of punctuation and keyword kinds.
            pub const fn text(self) -> Option<&'static str> {
                match self {
                    $( SyntaxKind::$name => syntax_kinds!(@text $($text)?), )+
                }
            }
        }
    };
    (@text $text:literal) => { Some($text) };
    (@text) => { None };
}

syntax_kinds! {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    Identifier,

    // Punctuation
    OpenBraceToken = "{",
    CloseBraceToken = "}",
    OpenParenToken = "(",
    CloseParenToken = ")",
    OpenBracketToken = "[",
    CloseBracketToken = "]",
    DotToken = ".",
    SemicolonToken = ";",
    CommaToken = ",",
    LessThanToken = "<",
    GreaterThanToken = ">",
    LessThanEqualsToken = "<=",
    GreaterThanEqualsToken = ">=",
    EqualsEqualsToken = "==",
    ExclamationEqualsToken = "!=",
    PlusToken = "+",
    MinusToken = "-",
    AsteriskToken = "*",
    SlashToken = "/",
    PercentToken = "%",
    PlusPlusToken = "++",
    MinusMinusToken = "--",
    LessThanLessThanToken = "<<",
    GreaterThanGreaterThanToken = ">>",
    AmpersandToken = "&",
    BarToken = "|",
    CaretToken = "^",
    ExclamationToken = "!",
    TildeToken = "~",
    AmpersandAmpersandToken = "&&",
    BarBarToken = "||",

    // Assignment
    EqualsToken = "=",
    PlusEqualsToken = "+=",
    MinusEqualsToken = "-=",
    AsteriskEqualsToken = "*=",
    SlashEqualsToken = "/=",
    PercentEqualsToken = "%=",
    LessThanLessThanEqualsToken = "<<=",
    GreaterThanGreaterThanEqualsToken = ">>=",
    AmpersandEqualsToken = "&=",
    BarEqualsToken = "|=",
    CaretEqualsToken = "^=",

    // Reserved words
    IncludeKeyword = "include",
    StructKeyword = "struct",
    StaticKeyword = "static",
    ConstKeyword = "const",
    NativeKeyword = "native",
    BreakKeyword = "break",
    ContinueKeyword = "continue",
    BreakpointKeyword = "breakpoint",
    ReturnKeyword = "return",
    DoKeyword = "do",
    ForKeyword = "for",
    WhileKeyword = "while",
    IfKeyword = "if",
    ElseKeyword = "else",
    TrueKeyword = "true",
    FalseKeyword = "false",
    NullKeyword = "null",
    TypedefKeyword = "typedef",

    // Primitive types
    BoolKeyword = "bool",
    ByteKeyword = "byte",
    CharKeyword = "char",
    IntKeyword = "int",
    FixedKeyword = "fixed",
    StringKeyword = "string",
    VoidKeyword = "void",

    // Native (complex) types
    AbilcmdKeyword = "abilcmd",
    ActorKeyword = "actor",
    ActorscopeKeyword = "actorscope",
    AifilterKeyword = "aifilter",
    BankKeyword = "bank",
    BitmaskKeyword = "bitmask",
    CamerainfoKeyword = "camerainfo",
    ColorKeyword = "color",
    DatetimeKeyword = "datetime",
    DoodadKeyword = "doodad",
    HandleKeyword = "handle",
    GenerichandleKeyword = "generichandle",
    EffecthistoryKeyword = "effecthistory",
    MarkerKeyword = "marker",
    OrderKeyword = "order",
    PlayergroupKeyword = "playergroup",
    PointKeyword = "point",
    RegionKeyword = "region",
    RevealerKeyword = "revealer",
    SoundKeyword = "sound",
    SoundlinkKeyword = "soundlink",
    TextKeyword = "text",
    TimerKeyword = "timer",
    TransmissionsourceKeyword = "transmissionsource",
    TriggerKeyword = "trigger",
    UnitKeyword = "unit",
    UnitfilterKeyword = "unitfilter",
    UnitgroupKeyword = "unitgroup",
    UnitrefKeyword = "unitref",
    WaveKeyword = "wave",
    WaveinfoKeyword = "waveinfo",
    WavetargetKeyword = "wavetarget",

    // Reference types
    ArrayrefKeyword = "arrayref",
    StructrefKeyword = "structref",
    FuncrefKeyword = "funcref",
}

impl SyntaxKind {
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::IncludeKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::FuncrefKeyword;
    pub const FIRST_TYPE_KEYWORD: SyntaxKind = SyntaxKind::BoolKeyword;
    pub const LAST_PRIMITIVE_TYPE_KEYWORD: SyntaxKind = SyntaxKind::VoidKeyword;
    pub const FIRST_COMPLEX_TYPE_KEYWORD: SyntaxKind = SyntaxKind::AbilcmdKeyword;
    pub const LAST_COMPLEX_TYPE_KEYWORD: SyntaxKind = SyntaxKind::WavetargetKeyword;
    pub const FIRST_REFERENCE_KEYWORD: SyntaxKind = SyntaxKind::ArrayrefKeyword;
    pub const LAST_TYPE_KEYWORD: SyntaxKind = SyntaxKind::FuncrefKeyword;

    /// Map a raw node-kind value back to a token kind.
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        Self::ALL.get(value as usize).copied()
    }

    #[inline]
    const fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }
}

static STRING_TO_TOKEN: Lazy<FxHashMap<&'static str, SyntaxKind>> = Lazy::new(|| {
    SyntaxKind::ALL
        .iter()
        .filter_map(|&kind| kind.text().map(|text| (text, kind)))
        .collect()
});

/// Source text of a punctuation or keyword kind.
pub fn token_to_string(kind: SyntaxKind) -> Option<&'static str> {
    kind.text()
}

/// Token kind for an exact punctuation or keyword string.
pub fn string_to_token(text: &str) -> Option<SyntaxKind> {
    STRING_TO_TOKEN.get(text).copied()
}

/// Keyword lookup. Only consulted for identifiers that start with a lowercase
/// ASCII letter, since every Galaxy keyword does.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    if !text.as_bytes().first().is_some_and(u8::is_ascii_lowercase) {
        return None;
    }
    string_to_token(text).filter(|&kind| token_is_keyword(kind))
}

pub fn token_is_keyword(kind: SyntaxKind) -> bool {
    kind.in_range(SyntaxKind::FIRST_KEYWORD, SyntaxKind::LAST_KEYWORD)
}

pub fn token_is_punctuation(kind: SyntaxKind) -> bool {
    kind.in_range(SyntaxKind::FIRST_PUNCTUATION, SyntaxKind::LAST_PUNCTUATION)
}

/// Any keyword that can start a type: primitive, native or reference.
pub fn token_is_type_keyword(kind: SyntaxKind) -> bool {
    kind.in_range(SyntaxKind::FIRST_TYPE_KEYWORD, SyntaxKind::LAST_TYPE_KEYWORD)
}

pub fn token_is_primitive_type_keyword(kind: SyntaxKind) -> bool {
    kind.in_range(
        SyntaxKind::FIRST_TYPE_KEYWORD,
        SyntaxKind::LAST_PRIMITIVE_TYPE_KEYWORD,
    )
}

pub fn token_is_complex_type_keyword(kind: SyntaxKind) -> bool {
    kind.in_range(
        SyntaxKind::FIRST_COMPLEX_TYPE_KEYWORD,
        SyntaxKind::LAST_COMPLEX_TYPE_KEYWORD,
    )
}

pub fn token_is_reference_keyword(kind: SyntaxKind) -> bool {
    kind.in_range(SyntaxKind::FIRST_REFERENCE_KEYWORD, SyntaxKind::LAST_TYPE_KEYWORD)
}

pub fn token_is_assignment_operator(kind: SyntaxKind) -> bool {
    kind.in_range(SyntaxKind::FIRST_ASSIGNMENT, SyntaxKind::LAST_ASSIGNMENT)
}

pub fn token_is_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::StaticKeyword | SyntaxKind::ConstKeyword | SyntaxKind::NativeKeyword
    )
}

/// Binary operator for a compound assignment (`+=` -> `+`).
pub fn compound_assignment_operator(kind: SyntaxKind) -> Option<SyntaxKind> {
    Some(match kind {
        SyntaxKind::PlusEqualsToken => SyntaxKind::PlusToken,
        SyntaxKind::MinusEqualsToken => SyntaxKind::MinusToken,
        SyntaxKind::AsteriskEqualsToken => SyntaxKind::AsteriskToken,
        SyntaxKind::SlashEqualsToken => SyntaxKind::SlashToken,
        SyntaxKind::PercentEqualsToken => SyntaxKind::PercentToken,
        SyntaxKind::LessThanLessThanEqualsToken => SyntaxKind::LessThanLessThanToken,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::AmpersandEqualsToken => SyntaxKind::AmpersandToken,
        SyntaxKind::BarEqualsToken => SyntaxKind::BarToken,
        SyntaxKind::CaretEqualsToken => SyntaxKind::CaretToken,
        _ => return None,
    })
}

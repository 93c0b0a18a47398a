//! Scanner implementation.
//!
//! `ScannerState` turns Galaxy source into one token per `scan()` call. It
//! never fails: malformed input produces a `ScannerDiagnostic` and scanning
//! continues with the next character.

use std::sync::Arc;

use bitflags::bitflags;
use gx_common::diagnostics::{DiagnosticCategory, DiagnosticMessage, diagnostic_messages};
use gx_common::{LineMap, format_message};

use crate::syntax_kind::{SyntaxKind, text_to_keyword};

bitflags! {
    /// Facts about the current token that are not visible from its kind.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const UNTERMINATED = 1 << 0;
        const HEX_SPECIFIER = 1 << 1;
        const BINARY_SPECIFIER = 1 << 2;
        const OCTAL_SPECIFIER = 1 << 3;
        /// Legacy `017` form.
        const OCTAL = 1 << 4;
        const DECIMAL_POINT = 1 << 5;
        const SCIENTIFIC = 1 << 6;
        const CONTAINS_INVALID_ESCAPE = 1 << 7;
        const CONTAINS_NON_ASCII = 1 << 8;
    }
}

impl TokenFlags {
    /// A numeric literal is `fixed` iff it has a decimal point or an exponent.
    pub fn is_fixed(self) -> bool {
        self.intersects(TokenFlags::DECIMAL_POINT | TokenFlags::SCIENTIFIC)
    }
}

/// A lexical problem. The parser drains these into its parse diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

/// Value-type checkpoint of the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerSnapshot {
    pub pos: usize,
    pub token: SyntaxKind,
    pub token_pos: usize,
    pub token_value: String,
    pub token_flags: TokenFlags,
    pub token_line: u32,
    pub token_char: u32,
    pub line_starts_len: usize,
    pub diagnostics_len: usize,
}

/// Tokenizer state machine.
#[derive(Clone, Debug)]
pub struct ScannerState {
    source: Arc<str>,
    pos: usize,
    token: SyntaxKind,
    token_pos: usize,
    token_value: String,
    token_flags: TokenFlags,
    token_line: u32,
    token_char: u32,
    /// Offset of the first byte of every line seen so far.
    line_starts: Vec<u32>,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let mut scanner = ScannerState {
            source: Arc::from(""),
            pos: 0,
            token: SyntaxKind::Unknown,
            token_pos: 0,
            token_value: String::new(),
            token_flags: TokenFlags::empty(),
            token_line: 0,
            token_char: 0,
            line_starts: vec![0],
            diagnostics: Vec::new(),
        };
        scanner.set_text(text);
        scanner
    }

    /// Reset to offset 0 over new text. Clears the line table and diagnostics.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.source = text.into();
        self.pos = 0;
        self.token = SyntaxKind::Unknown;
        self.token_pos = 0;
        self.token_value.clear();
        self.token_flags = TokenFlags::empty();
        self.token_line = 0;
        self.token_char = 0;
        self.line_starts.clear();
        self.line_starts.push(0);
        self.diagnostics.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn source_text_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Cooked token value: unescaped string contents, normalized numbers,
    /// identifier and operator text.
    pub fn get_token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw source slice of the current token.
    pub fn get_token_text(&self) -> &str {
        self.source.get(self.token_pos..self.pos).unwrap_or("")
    }

    pub fn get_token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn get_token_pos(&self) -> usize {
        self.token_pos
    }

    /// End offset of the current token.
    pub fn get_text_pos(&self) -> usize {
        self.pos
    }

    pub fn get_line(&self) -> u32 {
        self.token_line
    }

    pub fn get_char(&self) -> u32 {
        self.token_char
    }

    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    /// Line map for everything scanned so far. Complete once `scan()` has
    /// returned `EndOfFileToken`.
    pub fn line_map(&self) -> LineMap {
        LineMap::from_line_starts(self.line_starts.clone())
    }

    // =========================================================================
    // Checkpoints
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_pos: self.token_pos,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            token_line: self.token_line,
            token_char: self.token_char,
            line_starts_len: self.line_starts.len(),
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_pos = snapshot.token_pos;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.token_line = snapshot.token_line;
        self.token_char = snapshot.token_char;
        self.line_starts.truncate(snapshot.line_starts_len);
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    /// Run `f` and always roll the scanner back afterwards.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.save_state();
        let result = f(self);
        self.restore_state(snapshot);
        result
    }

    /// Run `f`, keeping its progress only when it returns `Some`.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.save_state();
        let result = f(self);
        if result.is_none() {
            self.restore_state(snapshot);
        }
        result
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    #[inline]
    fn current_line_start(&self) -> u32 {
        self.line_starts.last().copied().unwrap_or(0)
    }

    fn error(&mut self, pos: usize, length: usize, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message: format_message(message.message, args),
            code: message.code,
            category: message.category,
        });
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.byte_at(self.pos) {
            match ch {
                b'\n' => {
                    self.pos += 1;
                    self.line_starts.push(self.pos as u32);
                }
                b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.pos += 1,
                b'/' if self.byte_at(self.pos + 1) == Some(b'/') => {
                    self.pos += 2;
                    while let Some(c) = self.byte_at(self.pos) {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.token_pos = self.pos;
        self.token_flags = TokenFlags::empty();
        self.token_value.clear();
        self.token_line = (self.line_starts.len() - 1) as u32;
        self.token_char = self.pos as u32 - self.current_line_start();

        let Some(ch) = self.byte_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            b'"' | b'\'' => self.scan_string(ch),
            b'0'..=b'9' => self.scan_number(),
            b'.' if self.byte_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.scan_identifier(),
            _ => self.scan_punctuation(ch),
        };
        if self.token_value.is_empty() && self.token != SyntaxKind::StringLiteral {
            let text = self.get_token_text().to_string();
            self.token_value = text;
        }
        self.token
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while self
            .byte_at(self.pos)
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.pos += 1;
        }
        let text = &self.source[start..self.pos];
        text_to_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_punctuation(&mut self, ch: u8) -> SyntaxKind {
        let next = self.byte_at(self.pos + 1);
        let third = self.byte_at(self.pos + 2);
        let (kind, len) = match (ch, next) {
            (b'{', _) => (SyntaxKind::OpenBraceToken, 1),
            (b'}', _) => (SyntaxKind::CloseBraceToken, 1),
            (b'(', _) => (SyntaxKind::OpenParenToken, 1),
            (b')', _) => (SyntaxKind::CloseParenToken, 1),
            (b'[', _) => (SyntaxKind::OpenBracketToken, 1),
            (b']', _) => (SyntaxKind::CloseBracketToken, 1),
            (b'.', _) => (SyntaxKind::DotToken, 1),
            (b';', _) => (SyntaxKind::SemicolonToken, 1),
            (b',', _) => (SyntaxKind::CommaToken, 1),
            (b'~', _) => (SyntaxKind::TildeToken, 1),
            (b'<', Some(b'<')) if third == Some(b'=') => {
                (SyntaxKind::LessThanLessThanEqualsToken, 3)
            }
            (b'<', Some(b'<')) => (SyntaxKind::LessThanLessThanToken, 2),
            (b'<', Some(b'=')) => (SyntaxKind::LessThanEqualsToken, 2),
            (b'<', _) => (SyntaxKind::LessThanToken, 1),
            (b'>', Some(b'>')) if third == Some(b'=') => {
                (SyntaxKind::GreaterThanGreaterThanEqualsToken, 3)
            }
            (b'>', Some(b'>')) => (SyntaxKind::GreaterThanGreaterThanToken, 2),
            (b'>', Some(b'=')) => (SyntaxKind::GreaterThanEqualsToken, 2),
            (b'>', _) => (SyntaxKind::GreaterThanToken, 1),
            (b'=', Some(b'=')) => (SyntaxKind::EqualsEqualsToken, 2),
            (b'=', _) => (SyntaxKind::EqualsToken, 1),
            (b'!', Some(b'=')) => (SyntaxKind::ExclamationEqualsToken, 2),
            (b'!', _) => (SyntaxKind::ExclamationToken, 1),
            (b'+', Some(b'+')) => (SyntaxKind::PlusPlusToken, 2),
            (b'+', Some(b'=')) => (SyntaxKind::PlusEqualsToken, 2),
            (b'+', _) => (SyntaxKind::PlusToken, 1),
            (b'-', Some(b'-')) => (SyntaxKind::MinusMinusToken, 2),
            (b'-', Some(b'=')) => (SyntaxKind::MinusEqualsToken, 2),
            (b'-', _) => (SyntaxKind::MinusToken, 1),
            (b'*', Some(b'=')) => (SyntaxKind::AsteriskEqualsToken, 2),
            (b'*', _) => (SyntaxKind::AsteriskToken, 1),
            (b'/', Some(b'=')) => (SyntaxKind::SlashEqualsToken, 2),
            (b'/', _) => (SyntaxKind::SlashToken, 1),
            (b'%', Some(b'=')) => (SyntaxKind::PercentEqualsToken, 2),
            (b'%', _) => (SyntaxKind::PercentToken, 1),
            (b'&', Some(b'&')) => (SyntaxKind::AmpersandAmpersandToken, 2),
            (b'&', Some(b'=')) => (SyntaxKind::AmpersandEqualsToken, 2),
            (b'&', _) => (SyntaxKind::AmpersandToken, 1),
            (b'|', Some(b'|')) => (SyntaxKind::BarBarToken, 2),
            (b'|', Some(b'=')) => (SyntaxKind::BarEqualsToken, 2),
            (b'|', _) => (SyntaxKind::BarToken, 1),
            (b'^', Some(b'=')) => (SyntaxKind::CaretEqualsToken, 2),
            (b'^', _) => (SyntaxKind::CaretToken, 1),
            _ => {
                // Advance over the whole character so offsets stay on UTF-8 boundaries.
                let len = self.source[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.error(self.pos, len, &diagnostic_messages::INVALID_CHARACTER, &[]);
                (SyntaxKind::Unknown, len)
            }
        };
        self.pos += len;
        kind
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(ch) = self.source[self.pos..].chars().next() else {
                self.report_unterminated(start);
                break;
            };
            match ch {
                '\n' | '\r' => {
                    self.report_unterminated(start);
                    break;
                }
                c if c as u32 == u32::from(quote) => {
                    self.pos += 1;
                    break;
                }
                '\\' => {
                    let escape_pos = self.pos;
                    self.pos += 1;
                    let Some(escaped) = self.source[self.pos..].chars().next() else {
                        self.report_unterminated(start);
                        break;
                    };
                    if escaped == '\n' || escaped == '\r' {
                        self.report_unterminated(start);
                        break;
                    }
                    self.pos += escaped.len_utf8();
                    value.push(match escaped {
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        'b' => '\u{8}',
                        'f' => '\u{c}',
                        'v' => '\u{b}',
                        '0' => '\0',
                        '\\' | '"' | '\'' => escaped,
                        other => {
                            self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                            let text = other.to_string();
                            self.error(
                                escape_pos,
                                self.pos - escape_pos,
                                &diagnostic_messages::INVALID_ESCAPE_SEQUENCE,
                                &[&text],
                            );
                            other
                        }
                    });
                }
                c => {
                    if !c.is_ascii() {
                        self.token_flags |= TokenFlags::CONTAINS_NON_ASCII;
                        self.error(
                            self.pos,
                            c.len_utf8(),
                            &diagnostic_messages::NON_ASCII_CHARACTER_IN_STRING,
                            &[],
                        );
                    }
                    self.pos += c.len_utf8();
                    value.push(c);
                }
            }
        }
        self.token_value = value;
        SyntaxKind::StringLiteral
    }

    fn report_unterminated(&mut self, start: usize) {
        self.token_flags |= TokenFlags::UNTERMINATED;
        self.error(
            start,
            self.pos - start,
            &diagnostic_messages::UNTERMINATED_STRING_LITERAL,
            &[],
        );
    }

    fn scan_digits(&mut self, is_digit: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.byte_at(self.pos).is_some_and(&is_digit) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        if self.byte_at(self.pos) == Some(b'0') {
            let radix = match self.byte_at(self.pos + 1) {
                Some(b'x' | b'X') => Some((16, TokenFlags::HEX_SPECIFIER)),
                Some(b'b' | b'B') => Some((2, TokenFlags::BINARY_SPECIFIER)),
                Some(b'o' | b'O') => Some((8, TokenFlags::OCTAL_SPECIFIER)),
                _ => None,
            };
            if let Some((radix, flag)) = radix {
                self.pos += 2;
                self.token_flags |= flag;
                return self.scan_radix_digits(start, radix);
            }
            if let Some(kind) = self.try_scan_legacy_octal(start) {
                return kind;
            }
        }

        self.scan_digits(|c| c.is_ascii_digit());
        if self.byte_at(self.pos) == Some(b'.') {
            self.pos += 1;
            self.token_flags |= TokenFlags::DECIMAL_POINT;
            self.scan_digits(|c| c.is_ascii_digit());
        }
        let mantissa_end = self.pos;
        if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if self.scan_digits(|c| c.is_ascii_digit()) == 0 {
                self.error(self.pos, 0, &diagnostic_messages::DIGIT_EXPECTED, &[]);
                self.token_value = self.source[start..mantissa_end].to_string();
                return SyntaxKind::NumericLiteral;
            }
            let text = self.source[start..self.pos].to_string();
            self.token_value = match text.parse::<f64>() {
                Ok(value) if value.is_finite() => value.to_string(),
                _ => {
                    self.error(
                        start,
                        self.pos - start,
                        &diagnostic_messages::NUMERIC_LITERAL_TOO_LARGE,
                        &[],
                    );
                    text
                }
            };
            return SyntaxKind::NumericLiteral;
        }
        self.token_value = self.source[start..self.pos].to_string();
        SyntaxKind::NumericLiteral
    }

    /// `017` is octal unless an 8 or 9 shows up, in which case the literal is
    /// rescanned as decimal.
    fn try_scan_legacy_octal(&mut self, start: usize) -> Option<SyntaxKind> {
        if !self.byte_at(start + 1).is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        let mut end = start + 1;
        while self.byte_at(end).is_some_and(|c| c.is_ascii_digit()) {
            end += 1;
        }
        let digits = self.source[start + 1..end].to_string();
        if digits.bytes().any(|c| c == b'8' || c == b'9')
            || matches!(self.byte_at(end), Some(b'.' | b'e' | b'E'))
        {
            return None;
        }
        self.pos = end;
        self.token_flags |= TokenFlags::OCTAL;
        self.token_value = self.radix_value(start, &digits, 8);
        Some(SyntaxKind::NumericLiteral)
    }

    fn scan_radix_digits(&mut self, start: usize, radix: u32) -> SyntaxKind {
        let digits_start = self.pos;
        let count = self.scan_digits(|c| (c as char).is_digit(radix));
        if count == 0 {
            let message = match radix {
                16 => &diagnostic_messages::HEXADECIMAL_DIGIT_EXPECTED,
                2 => &diagnostic_messages::BINARY_DIGIT_EXPECTED,
                _ => &diagnostic_messages::OCTAL_DIGIT_EXPECTED,
            };
            self.error(self.pos, 0, message, &[]);
            self.token_value = "0".to_string();
            return SyntaxKind::NumericLiteral;
        }
        let digits = self.source[digits_start..self.pos].to_string();
        self.token_value = self.radix_value(start, &digits, radix);
        SyntaxKind::NumericLiteral
    }

    /// Decimal text of a radix literal. Values that overflow keep their
    /// source text.
    fn radix_value(&mut self, start: usize, digits: &str, radix: u32) -> String {
        match u64::from_str_radix(digits, radix) {
            Ok(value) => value.to_string(),
            Err(_) => {
                self.error(
                    start,
                    self.pos - start,
                    &diagnostic_messages::NUMERIC_LITERAL_TOO_LARGE,
                    &[],
                );
                self.source[start..self.pos].to_string()
            }
        }
    }
}

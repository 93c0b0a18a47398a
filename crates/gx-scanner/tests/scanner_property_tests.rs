//! Property-based tests for the Galaxy scanner.
//!
//! 1. **Scanner never panics** on arbitrary input and always reaches EOF
//! 2. **Tokens stay within the input** and never overlap
//! 3. **Restoring a checkpoint** reproduces the same token stream
//! 4. **Valid fragments** scan without diagnostics

use gx_scanner::{ScannerState, SyntaxKind};
use proptest::prelude::*;

const VALID_FRAGMENTS: &[&str] = &[
    "int x = 1;",
    "fixed f = 1.5e2;",
    "string s = \"a\\n\";",
    "if (a <= b && c != d) { return; }",
    "x <<= 2; y >>= 3; z ^= 4;",
    "unitgroup g; point p;",
    "funcref<void> f;",
    "// comment only",
    "0x7F 0b11 0o7 017",
];

/// Scan to EOF, returning `(kind, pos, end)` for every token.
fn scan_spans(text: &str) -> Vec<(SyntaxKind, usize, usize)> {
    let mut scanner = ScannerState::new(text);
    let mut tokens = Vec::new();
    // Every scan consumes at least one byte except EOF.
    for _ in 0..=text.len() {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            return tokens;
        }
        tokens.push((kind, scanner.get_token_pos(), scanner.get_text_pos()));
    }
    panic!("scanner did not reach EOF for {text:?}");
}

proptest! {
    #[test]
    fn scanner_never_panics(input in "\\PC{0,200}") {
        let _ = scan_spans(&input);
    }

    #[test]
    fn scanner_handles_arbitrary_bytes_as_text(input in prop::collection::vec(any::<char>(), 0..100)) {
        let text: String = input.into_iter().collect();
        let _ = scan_spans(&text);
    }

    #[test]
    fn token_spans_within_input_and_ordered(input in "[a-z0-9 ;{}()<>=!+\\-*/%&|^~.\"'\\\\\n]{0,120}") {
        let tokens = scan_spans(&input);
        let mut last_end = 0;
        for (_, pos, end) in tokens {
            prop_assert!(pos >= last_end);
            prop_assert!(end > pos);
            prop_assert!(end <= input.len());
            last_end = end;
        }
    }

    #[test]
    fn restore_reproduces_token_stream(input in "[a-z0-9 ;=+\n\"]{0,80}", skip in 0usize..10) {
        let mut scanner = ScannerState::new(input.as_str());
        for _ in 0..skip {
            scanner.scan();
        }
        let snapshot = scanner.save_state();
        let first: Vec<_> = (0..10).map(|_| (scanner.scan(), scanner.get_token_value().to_string())).collect();
        scanner.restore_state(snapshot);
        let second: Vec<_> = (0..10).map(|_| (scanner.scan(), scanner.get_token_value().to_string())).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn valid_fragments_scan_cleanly(index in 0..VALID_FRAGMENTS.len()) {
        let text = VALID_FRAGMENTS[index];
        let mut scanner = ScannerState::new(text);
        while scanner.scan() != SyntaxKind::EndOfFileToken {}
        prop_assert!(scanner.get_scanner_diagnostics().is_empty(), "{}", text);
    }
}

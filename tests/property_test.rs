//! Property tests for the scanner and the substitution loop.

use std::collections::HashMap;

use proptest::prelude::*;
use varsub::{Interpolator, Scanner, VarFormat};

proptest! {
    /// The scanner never panics on arbitrary input with the standard format.
    #[test]
    fn scanner_does_not_panic(s in "\\PC*") {
        let _ = Scanner::new(VarFormat::standard(), &s).next_token();
    }

    /// The scanner never panics for arbitrary single-character ASCII formats
    /// either, including ones where begin, end and escape collide.
    #[test]
    fn scanner_does_not_panic_with_odd_formats(
        s in "\\PC*",
        begin in "[!-~]{1,2}",
        end in "[!-~]{1,2}",
        escape in 0x21u8..0x7f,
    ) {
        let fmt = VarFormat::new(begin, end, escape);
        let _ = Scanner::new(&fmt, &s).next_token();
    }

    /// Any token the scanner reports spans a well-formed slice of its source:
    /// the span starts with the begin token, ends with the end token, and
    /// replacement preserves the surrounding text.
    #[test]
    fn reported_spans_are_consistent(s in "\\PC*") {
        let fmt = VarFormat::standard();
        if let Some(token) = Scanner::new(fmt, &s).next_token() {
            prop_assert!(token.start() <= token.end());
            prop_assert!(token.end() < s.len());
            prop_assert!(s[token.start()..].starts_with(&fmt.begin));
            prop_assert!(s[..=token.end()].ends_with(&fmt.end));

            let replaced = token.replace("");
            prop_assert_eq!(&replaced[..token.start()], &s[..token.start()]);
        }
    }

    /// Strings with no delimiter or escape bytes interpolate to themselves.
    #[test]
    fn delimiter_free_strings_are_fixed_points(s in "[a-zA-Z0-9 .,!?-]*") {
        let interp = Interpolator::new(HashMap::<String, String>::new());
        prop_assert_eq!(interp.interpolate(&s).unwrap(), s);
    }

    /// When every value is reference-free, one interpolation pass reaches a
    /// fixed point: no default-format reference survives, and re-running
    /// changes nothing.
    #[test]
    fn resolution_reaches_fixed_point(
        names in prop::collection::hash_map("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,12}", 1..4),
        filler in "[a-zA-Z ]{0,10}",
    ) {
        let vars: HashMap<String, String> = names
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let mut input = filler;
        for name in names.keys() {
            input.push_str("${");
            input.push_str(name);
            input.push('}');
        }

        let interp = Interpolator::new(vars);
        let resolved = interp.interpolate(&input).unwrap();

        prop_assert!(Scanner::new(VarFormat::standard(), &resolved).next_token().is_none());
        prop_assert_eq!(interp.interpolate(&resolved).unwrap(), resolved);
    }
}

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Canonicalize raw text for similarity comparison.
///
/// Collapses whitespace runs to a single space, trims, lowercases, then
/// strips every character that is not alphanumeric or whitespace. Total and
/// deterministic; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ").to_lowercase();
    collapsed
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_and_lowercases() {
        assert_eq!(normalize("  Hello,\n\t  WORLD!!  "), "hello world");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            normalize("Permission is hereby granted, free of charge."),
            "permission is hereby granted free of charge"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("!!!..."), "");
    }

    #[test]
    fn test_idempotent() {
        for t in [
            "Licensed under the Apache License, Version 2.0",
            "  GNU  GENERAL\tPUBLIC LICENSE\n Version 3 ",
            "redistribution and use in source and binary forms",
            "",
        ] {
            let once = normalize(t);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(normalize("Version 2.0"), "version 20");
    }
}

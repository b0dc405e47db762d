//! Parser and serializer for the `NAME=VALUE` line format
//!
//! Blank lines and `#` comments are skipped on read and not reproduced on
//! write, so comments do not survive an edit round-trip. Well-formed files
//! (no comments, normalized whitespace) round-trip byte-identically modulo
//! the trailing newline.

use crate::error::{Error, Result};
use crate::model::{Entry, VarSet};

/// Parse env file content into a variable set.
///
/// Lines are split on the first `=`; the name is whitespace-trimmed, as is
/// the value. A non-blank, non-comment line without `=` (or with an empty
/// name) aborts the parse, reporting the 1-based line number. A repeated
/// name keeps the last occurrence, mirroring shell sourcing semantics.
pub fn parse(content: &str) -> Result<VarSet> {
    let mut vars = VarSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = line.split_once('=').ok_or_else(|| Error::MalformedLine {
            line: idx + 1,
            content: raw.to_string(),
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MalformedLine {
                line: idx + 1,
                content: raw.to_string(),
            });
        }

        vars.upsert(Entry::new(name, value.trim()));
    }

    Ok(vars)
}

/// Serialize a variable set back to env file content.
///
/// One `NAME=VALUE` per line in set order, each newline-terminated. An
/// empty set serializes to the empty string.
pub fn serialize(vars: &VarSet) -> String {
    let mut out = String::new();
    for entry in vars.entries() {
        out.push_str(&entry.name);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let vars = parse("A=1\nB=2\n").unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("A"), Some("1"));
        assert_eq!(vars.get("B"), Some("2"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let vars = parse("# header\n\nA=1\n   \n# trailing\nB=2\n").unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_trims_name_and_value() {
        let vars = parse("  A  =  1  \n").unwrap();
        assert_eq!(vars.get("A"), Some("1"));
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let vars = parse("URL=https://example.com?a=b&c=d\n").unwrap();
        assert_eq!(vars.get("URL"), Some("https://example.com?a=b&c=d"));
    }

    #[test]
    fn test_parse_empty_value() {
        let vars = parse("EMPTY=\n").unwrap();
        assert_eq!(vars.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_parse_malformed_line_reports_line_number() {
        let err = parse("A=1\n# comment\nNOT A PAIR\n").unwrap_err();
        match err {
            Error::MalformedLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "NOT A PAIR");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty_name_is_malformed() {
        let err = parse("=VALUE\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_parse_duplicate_keeps_last() {
        let vars = parse("A=1\nB=2\nA=3\n").unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("A"), Some("3"));
        // Position stays where the name was first seen
        assert_eq!(vars.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&VarSet::new()), "");
    }

    #[test]
    fn test_round_trip() {
        let content = "A=1\nB=two words\nC=\nURL=http://x?a=b\n";
        let vars = parse(content).unwrap();
        assert_eq!(serialize(&vars), content);
    }
}

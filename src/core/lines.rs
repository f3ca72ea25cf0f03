// Testmode - core/lines.rs
//
// Conversion between multiline text blocks and ordered entry lists.
// Settings keys and form fields hold one entry per line; the canonical
// form is a list of trimmed, non-empty strings with order and duplicates
// preserved.
//
// The two directions test emptiness differently, and deliberately so:
// decoding trims each entry before dropping empties, encoding drops only
// elements that are exactly the empty string. A whitespace-only entry
// survives encoding but not decoding. Callers rely on this.

use serde::Deserialize;

/// A list of lines as it arrives from settings or user input: either a
/// single delimited text block or an explicit list of entries.
///
/// Deserialises untagged, so a TOML key accepts both
/// `key = "one\ntwo"` and `key = ["one", "two"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinesValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for LinesValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LinesValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<S: Into<String>> From<Vec<S>> for LinesValue {
    fn from(entries: Vec<S>) -> Self {
        Self::List(entries.into_iter().map(Into::into).collect())
    }
}

/// Decodes text or a list into the canonical entry list.
///
/// Text input is split on newlines (`\r\n` normalised to `\n` first).
/// Every entry is trimmed; entries empty after trimming are dropped.
/// Order is preserved and duplicates are kept. Total: empty or
/// whitespace-only input yields an empty list.
pub fn to_list(input: impl Into<LinesValue>) -> Vec<String> {
    let entries = match input.into() {
        LinesValue::List(entries) => entries,
        LinesValue::Text(text) => text
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::to_string)
            .collect(),
    };
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Encodes a list (or a single string, treated as a one-element list)
/// into a newline-joined text block.
///
/// Elements equal to the empty string are dropped; no trimming happens
/// here, so whitespace-only elements are kept verbatim.
pub fn to_text(input: impl Into<LinesValue>) -> String {
    let entries = match input.into() {
        LinesValue::Text(text) => vec![text],
        LinesValue::List(entries) => entries,
    };
    entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn decode_drops_blank_and_trims() {
        assert_eq!(to_list(""), Vec::<String>::new());
        assert_eq!(to_list(" "), Vec::<String>::new());
        assert_eq!(to_list("\n \n\t\n"), Vec::<String>::new());
        assert_eq!(to_list("a"), strings(&["a"]));
        assert_eq!(to_list("a\n        b"), strings(&["a", "b"]));
        assert_eq!(to_list("a aa\n        b"), strings(&["a aa", "b"]));
        assert_eq!(
            to_list("a aa\n        b\n        c"),
            strings(&["a aa", "b", "c"])
        );
        assert_eq!(to_list("a\n  b  \n\nc"), strings(&["a", "b", "c"]));
    }

    #[test]
    fn decode_normalises_crlf() {
        assert_eq!(to_list("a\r\nb\r\nc"), strings(&["a", "b", "c"]));
        assert_eq!(to_list("a\r\n\r\nb"), strings(&["a", "b"]));
        // A carriage return inside an entry is content; at the edges it is
        // whitespace and trims away.
        assert_eq!(to_list("a\rb\nc"), strings(&["a\rb", "c"]));
        assert_eq!(to_list("a\r\nb\r"), strings(&["a", "b"]));
    }

    #[test]
    fn decode_accepts_lists_and_filters_them() {
        assert_eq!(to_list(vec!["a", "b"]), strings(&["a", "b"]));
        assert_eq!(to_list(vec![" a ", "", "  "]), strings(&["a"]));
        assert_eq!(to_list(Vec::<String>::new()), Vec::<String>::new());
    }

    #[test]
    fn decode_preserves_order_and_duplicates() {
        assert_eq!(to_list("b\na\nb"), strings(&["b", "a", "b"]));
        assert_eq!(to_list(vec!["x", "x"]), strings(&["x", "x"]));
    }

    #[test]
    fn decode_keeps_literal_zero_entries() {
        assert_eq!(to_list("0\n00"), strings(&["0", "00"]));
    }

    #[test]
    fn encode_drops_only_exactly_empty_elements() {
        assert_eq!(to_text(Vec::<String>::new()), "");
        assert_eq!(to_text(vec![""]), "");
        assert_eq!(to_text(vec!["", ""]), "");
        assert_eq!(to_text(vec![" ", ""]), " ");
        assert_eq!(to_text(vec!["a"]), "a");
        assert_eq!(to_text(vec!["a", "b"]), "a\nb");
        assert_eq!(to_text(vec![" a ", "b"]), " a \nb");
        assert_eq!(to_text(vec![" a ", "", "b"]), " a \nb");
        assert_eq!(to_text(vec![" a ", " ", "b"]), " a \n \nb");
    }

    #[test]
    fn encode_wraps_single_strings() {
        assert_eq!(to_text(""), "");
        assert_eq!(to_text("a"), "a");
        assert_eq!(to_text(" "), " ");
    }

    #[test]
    fn asymmetry_is_preserved() {
        // Whitespace-only entries survive encoding but not decoding.
        assert_eq!(to_text(vec![" "]), " ");
        assert_eq!(to_list(" "), Vec::<String>::new());
        assert_eq!(to_list(to_text(vec![" a ", " ", "b"])), strings(&["a", "b"]));
    }

    #[test]
    fn decode_is_idempotent() {
        let once = to_list(" a \n\n b ");
        let twice = to_list(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn round_trip_preserves_clean_entries() {
        let entries = strings(&["a", "b b", "c"]);
        assert_eq!(to_list(to_text(entries.clone())), entries);
        let text = to_text(entries);
        assert_eq!(to_text(to_list(text.clone())), text);
    }

    #[test]
    fn untagged_value_deserialises_both_shapes() {
        #[derive(Deserialize)]
        struct Doc {
            key: LinesValue,
        }

        let text: Doc = toml::from_str("key = \"one\\ntwo\"").expect("string form parses");
        assert_eq!(text.key, LinesValue::Text("one\ntwo".to_string()));

        let list: Doc = toml::from_str("key = [\"one\", \"two\"]").expect("array form parses");
        assert_eq!(list.key, LinesValue::List(strings(&["one", "two"])));
    }
}

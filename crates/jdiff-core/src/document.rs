use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// One parsed and reformatted JSON input.
///
/// A document is created fresh for every diff invocation and is immutable:
/// it carries the raw text, the parsed value, the text reserialized with a
/// consistent indent, and the formatted line sequence the aligner works on.
///
/// ```
/// # use jdiff_core::ParsedDocument;
/// let doc = ParsedDocument::parse("{\"a\":1}", 2)?;
/// assert_eq!(doc.lines().len(), 3);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ParsedDocument {
    raw: String,
    value: Value,
    formatted: String,
    lines: Vec<String>,
}

impl ParsedDocument {
    /// Parses a JSON string and reserializes it with `indent_size` spaces.
    ///
    /// An indent of zero produces compact single-line output.
    pub fn parse(text: &str, indent_size: usize) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        let formatted = format_value(&value, indent_size);
        let lines = formatted.lines().map(str::to_owned).collect();
        Ok(Self { raw: text.to_owned(), value, formatted, lines })
    }

    /// Returns the original input text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the reformatted text.
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Returns the formatted text split into lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the document and returns the formatted text.
    #[must_use]
    pub fn into_formatted(self) -> String {
        self.formatted
    }
}

fn format_value(value: &Value, indent_size: usize) -> String {
    if indent_size == 0 {
        return serde_json::to_string(value).expect("serialize JSON value");
    }
    let indent = " ".repeat(indent_size);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).expect("serialize JSON value");
    String::from_utf8(buffer).expect("serializer emits UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_space_indent_splits_object_across_lines() {
        let doc = ParsedDocument::parse("{\"a\":1,\"b\":[1,2]}", 2).unwrap();
        let lines = doc.lines();
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "  \"a\": 1,");
        assert_eq!(*lines.last().unwrap(), "}");
    }

    #[test]
    fn zero_indent_is_single_line() {
        let doc = ParsedDocument::parse("{\"a\": 1}", 0).unwrap();
        assert_eq!(doc.lines(), ["{\"a\":1}"]);
    }

    #[test]
    fn four_space_indent_widens_nesting() {
        let doc = ParsedDocument::parse("{\"a\":{\"b\":1}}", 4).unwrap();
        assert!(doc.formatted().contains("    \"a\": {"));
        assert!(doc.formatted().contains("        \"b\": 1"));
    }

    #[test]
    fn raw_text_is_preserved_verbatim() {
        let doc = ParsedDocument::parse("  {\"a\":1}  ", 2).unwrap();
        assert_eq!(doc.raw(), "  {\"a\":1}  ");
    }

    #[test]
    fn parse_failure_surfaces_serde_error() {
        assert!(ParsedDocument::parse("{\"a\":}", 2).is_err());
    }
}

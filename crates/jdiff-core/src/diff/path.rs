use std::fmt;

/// A single step within a [`JsonPath`].
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// The location of a structural difference within a JSON value tree.
///
/// Rendered in dot/bracket notation: object keys append as `.key` (bare at
/// the root) and array indices as `[i]`, e.g. `user.addresses[0].city`.
///
/// ```
/// # use jdiff_core::JsonPath;
/// let path = JsonPath::root().child_key("items").child_index(2);
/// assert_eq!(path.to_string(), "items[2]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<Segment>);

impl JsonPath {
    /// Creates the root path, rendered as an empty string.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended with an object key.
    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.to_owned()));
        Self(segments)
    }

    /// Returns a new path extended with an array index.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    /// Indicates whether this is the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(JsonPath::root().to_string(), "");
        assert!(JsonPath::root().is_root());
    }

    #[test]
    fn nested_keys_join_with_dots() {
        let path = JsonPath::root().child_key("address").child_key("city");
        assert_eq!(path.to_string(), "address.city");
    }

    #[test]
    fn indices_use_brackets_without_dots() {
        let path = JsonPath::root().child_key("items").child_index(2).child_key("id");
        assert_eq!(path.to_string(), "items[2].id");
    }

    #[test]
    fn root_array_index_is_bare_brackets() {
        assert_eq!(JsonPath::root().child_index(0).to_string(), "[0]");
    }
}

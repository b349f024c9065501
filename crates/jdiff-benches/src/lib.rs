//! Benchmark corpora for the `jdiff` JSON line-diff engine.
//!
//! Exposes deterministic document pairs sized to exercise the quadratic
//! line-alignment pass at different scales. The alignment is the dominant
//! engine cost, so corpora are characterized by formatted line count.
//!
//! # Examples
//!
//! ```
//! let corpora = jdiff_benches::available_corpora();
//! assert!(!corpora.is_empty());
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fmt::Write as _;

use jdiff_core::{diff_json, DiffOptions, DiffResult};

/// One named benchmark document pair.
#[derive(Clone, Debug)]
pub struct Corpus {
    name: &'static str,
    original: String,
    modified: String,
}

impl Corpus {
    /// Returns the corpus name used as the benchmark id.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the combined byte size of both documents.
    #[must_use]
    pub fn fixture_bytes(&self) -> usize {
        self.original.len() + self.modified.len()
    }

    /// Diffs the pair with the provided options.
    ///
    /// # Panics
    ///
    /// Panics if the corpus documents fail to parse; corpora are built from
    /// known-valid fixtures.
    #[must_use]
    pub fn diff(&self, options: &DiffOptions) -> DiffResult {
        diff_json(&self.original, &self.modified, options).expect("corpus documents are valid")
    }
}

/// Returns every built-in corpus, smallest first.
#[must_use]
pub fn available_corpora() -> Vec<Corpus> {
    let samples = jdiff_core::sample_documents();
    vec![
        Corpus { name: "sample", original: samples.original, modified: samples.modified },
        synthetic_corpus("flat-200", 200),
        synthetic_corpus("flat-1000", 1000),
    ]
}

/// Builds a flat object pair with `keys` entries where every tenth value
/// differs and every fiftieth key exists on one side only.
fn synthetic_corpus(name: &'static str, keys: usize) -> Corpus {
    let mut original = String::from("{");
    let mut modified = String::from("{");
    for index in 0..keys {
        if index > 0 {
            original.push(',');
            modified.push(',');
        }
        let _ = write!(original, "\"key{index:05}\":{index}");
        if index % 50 == 49 {
            let _ = write!(modified, "\"extra{index:05}\":{index}");
        } else if index % 10 == 9 {
            let _ = write!(modified, "\"key{index:05}\":{}", index + 1);
        } else {
            let _ = write!(modified, "\"key{index:05}\":{index}");
        }
    }
    original.push('}');
    modified.push('}');
    Corpus { name, original, modified }
}

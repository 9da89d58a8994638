//! Segmentation options.

use serde::{Deserialize, Serialize};

/// Column width used for East Asian Ambiguous characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousWidth {
    /// One column (Western contexts).
    #[default]
    Narrow,
    /// Two columns (CJK legacy contexts).
    Wide,
}

impl AmbiguousWidth {
    #[inline]
    pub fn columns(self) -> u16 {
        match self {
            AmbiguousWidth::Narrow => 1,
            AmbiguousWidth::Wide => 2,
        }
    }
}

/// Knobs shared by all engines. `Default` gives narrow ambiguous width and the
/// abbreviation heuristic enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Options {
    pub ambiguous: AmbiguousWidth,
    /// Suppress sentence breaks after short abbreviations such as `Mr.`.
    pub abbreviations: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ambiguous: AmbiguousWidth::Narrow,
            abbreviations: true,
        }
    }
}

impl Options {
    pub fn with_ambiguous(mut self, ambiguous: AmbiguousWidth) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    pub fn with_abbreviations(mut self, enabled: bool) -> Self {
        self.abbreviations = enabled;
        self
    }
}

//! The configured set of base dimensions.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{AnalysisError, Result};

/// An ordered, non-empty list of base-dimension symbols.
///
/// The length is the `D` every exponent vector must have. Symbols are only
/// labels; the engine never interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseDimensions {
    symbols: Vec<String>,
}

impl BaseDimensions {
    /// Creates a base-dimension set from its symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBaseDimensions`] if the list is empty,
    /// or a symbol is blank or repeated.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(AnalysisError::InvalidBaseDimensions(
                "at least one base dimension is required".to_string(),
            ));
        }
        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if symbol.trim().is_empty() {
                return Err(AnalysisError::InvalidBaseDimensions(
                    "blank dimension symbol".to_string(),
                ));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(AnalysisError::InvalidBaseDimensions(format!(
                    "dimension `{symbol}` listed twice"
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Mass, length, time.
    #[must_use]
    pub fn mlt() -> Self {
        Self::from_static(&["M", "L", "T"])
    }

    /// The seven SI base dimensions: mass, length, time, electric current,
    /// temperature, amount of substance, luminous intensity.
    #[must_use]
    pub fn si() -> Self {
        Self::from_static(&["M", "L", "T", "I", "Θ", "N", "J"])
    }

    /// `count` unnamed dimensions labelled `d0`, `d1`, ...
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBaseDimensions`] if `count` is zero.
    pub fn anonymous(count: usize) -> Result<Self> {
        Self::new((0..count).map(|i| format!("d{i}")))
    }

    fn from_static(symbols: &[&str]) -> Self {
        Self {
            symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Number of base dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Position of a symbol.
    #[must_use]
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }
}

impl Default for BaseDimensions {
    fn default() -> Self {
        Self::mlt()
    }
}

impl fmt::Display for BaseDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.symbols.join(", "))
    }
}

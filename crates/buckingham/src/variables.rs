//! Validated, ordered collections of physical variables.
//!
//! A [`VariableSet`] enforces the input invariants when a variable is
//! inserted rather than when the analysis runs: names are unique and
//! non-empty, every exponent vector has the same length, and every exponent
//! is a finite rational.

use buckingham_exact::{ExactError, Rational};
use rustc_hash::FxHashMap;

use crate::dimensions::BaseDimensions;
use crate::error::{AnalysisError, Result};

/// Characters that carry meaning in a rendered term.
const RESERVED_NAME_CHARS: [char; 5] = ['*', '^', '(', ')', '/'];

/// A named physical quantity and its exponents over the base dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    exponents: Vec<Rational>,
}

impl Variable {
    /// The variable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exponents over the base dimensions, in base-dimension order.
    #[must_use]
    pub fn exponents(&self) -> &[Rational] {
        &self.exponents
    }
}

/// An insertion-ordered map from variable name to exponent vector.
///
/// Insertion order is significant: it is the column order of the dimension
/// matrix and the factor order of every Pi term. Reordering the same
/// variables can therefore change which Pi terms are produced, but never how
/// many there are.
#[derive(Clone, Debug, Default)]
pub struct VariableSet {
    variables: Vec<Variable>,
    index: FxHashMap<String, usize>,
    /// Required exponent-vector length, once known.
    dimension_count: Option<usize>,
}

impl VariableSet {
    /// Creates an empty set. The exponent length is fixed by the first
    /// insertion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set whose exponent vectors must match `dimensions`.
    #[must_use]
    pub fn with_dimensions(dimensions: &BaseDimensions) -> Self {
        Self {
            dimension_count: Some(dimensions.len()),
            ..Self::default()
        }
    }

    /// Builds a set from `(name, integer exponents)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first pair that [`VariableSet::insert`] would reject.
    pub fn from_i64<I, N, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: IntoIterator<Item = i64>,
    {
        let mut set = Self::new();
        for (name, exponents) in pairs {
            set.insert(name, exponents.into_iter().map(Rational::from).collect())?;
        }
        Ok(set)
    }

    /// Appends a variable with exact exponents.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidVariableName`] for an empty name or one
    ///   containing whitespace or any of `* ^ ( ) /`
    /// - [`AnalysisError::DuplicateVariable`] if the name is taken
    /// - [`AnalysisError::DimensionMismatch`] if the exponent count differs
    ///   from the set's dimension count, or is zero
    pub fn insert(&mut self, name: impl Into<String>, exponents: Vec<Rational>) -> Result<()> {
        let name = name.into();
        self.check_name(&name)?;
        let expected = self.dimension_count.unwrap_or(exponents.len());
        if exponents.len() != expected || exponents.is_empty() {
            return Err(AnalysisError::DimensionMismatch {
                variable: name,
                expected: expected.max(1),
                actual: exponents.len(),
            });
        }
        self.dimension_count = Some(expected);
        self.index.insert(name.clone(), self.variables.len());
        self.variables.push(Variable { name, exponents });
        Ok(())
    }

    /// Appends a variable with integer exponents.
    ///
    /// # Errors
    ///
    /// As for [`VariableSet::insert`].
    pub fn insert_i64(&mut self, name: impl Into<String>, exponents: &[i64]) -> Result<()> {
        self.insert(name, exponents.iter().map(|&e| Rational::from(e)).collect())
    }

    /// Appends a variable with floating point exponents, converted exactly.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidExponent`] for NaN or an infinity, otherwise as
    /// for [`VariableSet::insert`].
    pub fn insert_f64(&mut self, name: impl Into<String>, exponents: &[f64]) -> Result<()> {
        let name = name.into();
        let exponents = convert_all(&name, exponents, |&e| Rational::try_from_f64(e))?;
        self.insert(name, exponents)
    }

    /// Appends a variable whose exponents are given as text, e.g. `"-2"` or
    /// `"3/2"`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidExponent`] for text that is not a rational
    /// literal, otherwise as for [`VariableSet::insert`].
    pub fn insert_parsed<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        exponents: &[S],
    ) -> Result<()> {
        let name = name.into();
        let exponents = convert_all(&name, exponents, |e| e.as_ref().parse::<Rational>())?;
        self.insert(name, exponents)
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || RESERVED_NAME_CHARS.contains(&c))
        {
            return Err(AnalysisError::InvalidVariableName(name.to_string()));
        }
        if self.index.contains_key(name) {
            return Err(AnalysisError::DuplicateVariable(name.to_string()));
        }
        Ok(())
    }

    /// Number of variables (`N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Exponent-vector length (`D`), if fixed yet.
    #[must_use]
    pub fn dimension_count(&self) -> Option<usize> {
        self.dimension_count
    }

    /// Looks a variable up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&i| &self.variables[i])
    }

    /// Column index of a variable.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(Variable::name)
    }
}

impl PartialEq for VariableSet {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables && self.dimension_count == other.dimension_count
    }
}

impl Eq for VariableSet {}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn convert_all<T>(
    name: &str,
    values: &[T],
    convert: impl Fn(&T) -> std::result::Result<Rational, ExactError>,
) -> Result<Vec<Rational>> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| {
            convert(value).map_err(|source| AnalysisError::InvalidExponent {
                variable: name.to_string(),
                position,
                source,
            })
        })
        .collect()
}

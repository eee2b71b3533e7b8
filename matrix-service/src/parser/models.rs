// Build Matrix Data Models
// Types representing the matrix section of a pipeline document

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use std::fmt;

/// A single matrix variable and its candidate values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixVariable {
    pub name: String,
    pub values: Vec<String>,
}

/// Build matrix: variable names mapped to their candidate values.
///
/// Variables keep their declaration order. The permutation arithmetic in
/// [`crate::execution::MatrixExpander`] depends on it, so the same document
/// always expands to the same axis sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    variables: Vec<MatrixVariable>,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable. Re-inserting an existing name replaces its values but
    /// keeps its original position.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.variables.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.values = values,
            None => self.variables.push(MatrixVariable { name, values }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.values.as_slice())
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixVariable> {
        self.variables.iter()
    }

    /// Variable names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }
}

impl<K, I, S> FromIterator<(K, I)> for Matrix
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut matrix = Matrix::new();
        for (name, values) in iter {
            matrix.insert(name, values);
        }
        matrix
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MatrixVisitor;

        impl<'de> Visitor<'de> for MatrixVisitor {
            type Value = Matrix;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of variable names to lists of values")
            }

            fn visit_unit<E>(self) -> Result<Matrix, E>
            where
                E: serde::de::Error,
            {
                Ok(Matrix::new())
            }

            fn visit_map<M>(self, mut access: M) -> Result<Matrix, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut matrix = Matrix::new();
                // Null entries decode as empty strings
                while let Some((name, values)) =
                    access.next_entry::<String, Vec<Option<String>>>()?
                {
                    matrix.insert(name, values.into_iter().map(Option::unwrap_or_default));
                }
                Ok(matrix)
            }
        }

        deserializer.deserialize_map(MatrixVisitor)
    }
}

/// Pipeline document as seen by the matrix decoder.
///
/// Only the `matrix` section is decoded; every other key is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatrixDocument {
    #[serde(default, deserialize_with = "deserialize_optional_matrix")]
    pub matrix: Matrix,
}

/// Treat `matrix: ~` the same as a missing section
fn deserialize_optional_matrix<'de, D>(deserializer: D) -> Result<Matrix, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Matrix>::deserialize(deserializer)?.unwrap_or_default())
}

// Matrix Axis
// A single resolved combination of matrix variables

use serde::ser::{Serialize, SerializeMap, Serializer};

use std::fmt;

/// One permutation of the build matrix: exactly one value per variable.
///
/// Entries keep the order in which the expander assigned them, which is the
/// declaration order of the source matrix. Rendering is therefore stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Axis {
    entries: Vec<(String, String)>,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to a variable, replacing any previous assignment in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get the value selected for a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(variable, value)` pairs in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Environment variables to inject when running the build for this axis
    pub fn env(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }
}

impl fmt::Display for Axis {
    /// Comma-separated `KEY=VALUE` list
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Axis
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut axis = Axis::new();
        for (k, v) in iter {
            axis.insert(k, v);
        }
        axis
    }
}

impl Serialize for Axis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

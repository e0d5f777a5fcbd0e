//! Construction argument mappings.

use crate::value::{IntoArgument, Supplied};
use hashbrown::HashMap;
use serde_json::{Map, Value};

/// A mapping from field name to value, supplied when constructing a
/// [`StructBase`](crate::StructBase) type.
///
/// Entries keep insertion order so that the first offending name is the one
/// reported. Inserting a name twice replaces the earlier value in place.
/// Equality ignores order: two mappings are equal when they supply the same
/// names with the same values.
///
/// `NaN` and infinite floats have no JSON representation. They are kept as
/// [`Supplied::NonFinite`] and rejected as a type mismatch on construction
/// rather than read as `null`.
///
/// ```rust
/// use sugars_struct::Arguments;
///
/// let args = Arguments::from([("x", 3), ("y", 4)]);
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.names().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    entries: Vec<(String, Supplied)>,
    index: HashMap<String, usize>,
}

impl Arguments {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mapping with `name` set to `value`.
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl IntoArgument) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning what it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl IntoArgument) -> Option<Supplied> {
        let name = name.into();
        let value = Supplied::from(value.into_argument());
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// The value supplied for `name`. `None` for a non-finite float; see
    /// [`supplied`](Self::supplied).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.supplied(name).and_then(Supplied::as_value)
    }

    /// What was supplied for `name`, including non-finite floats.
    pub fn supplied(&self, name: &str) -> Option<&Supplied> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Whether a value was supplied for `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Supplied)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over the supplied names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Arguments {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.supplied(name) == Some(value))
    }
}

impl IntoIterator for Arguments {
    type Item = (String, Supplied);
    type IntoIter = std::vec::IntoIter<(String, Supplied)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Arguments::new();
        args.extend(iter);
        args
    }
}

impl<K, V> Extend<(K, V)> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    #[inline]
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<HashMap<K, V>> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    #[inline]
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<std::collections::HashMap<K, V>> for Arguments
where
    K: Into<String>,
    V: IntoArgument,
{
    #[inline]
    fn from(map: std::collections::HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Map<String, Value>> for Arguments {
    #[inline]
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

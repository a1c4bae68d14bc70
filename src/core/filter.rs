use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Filters
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Filter Value
--------------------------------------------------------------------------------------*/

/// The value of a single NetBox Lists filter. A [FilterValue::Multiple] value is sent as one
/// `key=value` query parameter per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FilterValue {
    /// The individual values sent for this filter, in order.
    pub fn values(&self) -> &[String] {
        match self {
            FilterValue::Single(value) => std::slice::from_ref(value),
            FilterValue::Multiple(values) => values,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for FilterValue {
    fn from(values: Vec<S>) -> Self {
        FilterValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FilterValue {
    fn from(values: [S; N]) -> Self {
        FilterValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/*--------------------------------------------------------------------------------------
  Filters
--------------------------------------------------------------------------------------*/

/// Key/value filters forwarded to every requested NetBox Lists endpoint, for example
/// `tag=special` or `role=data`. Keys are sent in sorted order.
///
/// ```
/// let mut filters = nblists::Filters::new();
/// filters.insert("tag", ["special", "edge"]).insert("family", 4u32);
///
/// let pairs: Vec<(&str, &str)> = filters.pairs().collect();
/// assert_eq!(pairs, [("family", "4"), ("tag", "special"), ("tag", "edge")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, FilterValue>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter, replacing any existing value for `key`.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<FilterValue>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Add a value to a filter; a key given more than once becomes a multi-valued filter.
    pub fn push<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        let updated = match self.0.remove(&key) {
            None => FilterValue::Single(value),
            Some(FilterValue::Single(existing)) => FilterValue::Multiple(vec![existing, value]),
            Some(FilterValue::Multiple(mut values)) => {
                values.push(value);
                FilterValue::Multiple(values)
            }
        };
        self.0.insert(key, updated);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand the filters into query-string pairs, one pair per value.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, value)| {
            value
                .values()
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

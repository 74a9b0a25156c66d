//! Supplied filter inputs for one list call.
//!
//! "Supplied with an empty list" and "not supplied" are distinct states: the
//! former matches nothing, the latter leaves the query unconstrained. The
//! `maybe_*` constructors take `Option<Vec<_>>` so that distinction is carried
//! by the type instead of an implicit convention.

/// Candidate values for one filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Ints(Vec<i32>),
    Texts(Vec<String>),
}

/// Named optional value-lists, kept in insertion order. Only supplied
/// filters are present; absent filters contribute no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterMap {
    entries: Vec<(&'static str, FilterValue)>,
}

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an id-list filter when the caller supplied one.
    pub fn maybe_ints(mut self, name: &'static str, values: Option<Vec<i32>>) -> Self {
        if let Some(values) = values {
            self.entries.push((name, FilterValue::Ints(values)));
        }
        self
    }

    /// Adds a string-list filter when the caller supplied one.
    pub fn maybe_texts(mut self, name: &'static str, values: Option<Vec<String>>) -> Self {
        if let Some(values) = values {
            self.entries.push((name, FilterValue::Texts(values)));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FilterValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filters_are_not_recorded() {
        let filters = FilterMap::new()
            .maybe_ints("airport_id", None)
            .maybe_texts("city", None);
        assert!(filters.is_empty());
    }

    #[test]
    fn supplied_empty_list_is_recorded() {
        // An empty candidate list is "match nothing", not "unconstrained".
        let filters = FilterMap::new().maybe_texts("city", Some(vec![]));
        assert_eq!(filters.len(), 1);
        let (name, value) = filters.iter().next().unwrap();
        assert_eq!(name, "city");
        assert_eq!(value, &FilterValue::Texts(vec![]));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let filters = FilterMap::new()
            .maybe_texts("country", Some(vec!["US".to_string()]))
            .maybe_ints("airport_id", Some(vec![1, 2]))
            .maybe_texts("city", None);
        let names: Vec<_> = filters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["country", "airport_id"]);
    }
}

//! Criteria and the filter predicate.
//!
//! A [`Criteria`] bundles what the filter bar of a listing view holds: the
//! search box text and one selection per categorical dropdown. Applying it
//! with [`filter`] keeps the collection's original order; nothing is resorted
//! or capped.

use super::Filterable;

/// One categorical selector: either unconstrained or pinned to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The "all" option: the clause always passes.
    Any,
    /// Keep records whose field equals this value exactly.
    Is(String),
}

impl Selection {
    pub fn is(value: impl Into<String>) -> Self {
        Selection::Is(value.into())
    }

    /// Parse a CLI-style selector where the literal "all" (or absence)
    /// means unconstrained.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => Selection::Any,
            Some(v) => Selection::Is(v.to_string()),
        }
    }
}

/// Active filter criteria for one listing: free-text query plus categorical
/// selections keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    query: String,
    selections: Vec<(&'static str, Selection)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with(mut self, field: &'static str, selection: Selection) -> Self {
        self.selections.push((field, selection));
        self
    }

    /// True when the criteria cannot exclude anything: empty query and every
    /// selection set to [`Selection::Any`].
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self
                .selections
                .iter()
                .all(|(_, s)| matches!(s, Selection::Any))
    }

    /// The matching rule: every non-`Any` selection must equal the record's
    /// field exactly, and a non-empty query must appear (case-insensitively)
    /// in at least one search field.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        for (field, selection) in &self.selections {
            if let Selection::Is(wanted) = selection {
                match record.field(field) {
                    Some(value) if value.matches_exactly(wanted) => {}
                    _ => return false,
                }
            }
        }

        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        T::SEARCH_FIELDS.iter().any(|field| {
            record
                .field(field)
                .is_some_and(|value| value.render().to_lowercase().contains(&needle))
        })
    }
}

/// Apply `criteria` to `records`, preserving relative order. Records are
/// cloned into the result; the input is untouched.
pub fn filter<T: Filterable + Clone>(records: &[T], criteria: &Criteria) -> Vec<T> {
    records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::FieldValue;
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit {
        number: String,
        status: &'static str,
        area: f64,
    }

    impl Filterable for Unit {
        const SEARCH_FIELDS: &'static [&'static str] = &["number", "area"];

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "number" => Some(FieldValue::Text(self.number.clone())),
                "status" => Some(FieldValue::Keyword(self.status)),
                "area" => Some(FieldValue::Float(self.area)),
                _ => None,
            }
        }
    }

    fn units() -> Vec<Unit> {
        vec![
            Unit {
                number: "A101".into(),
                status: "available",
                area: 850.0,
            },
            Unit {
                number: "A102".into(),
                status: "sold",
                area: 920.0,
            },
            Unit {
                number: "S101".into(),
                status: "available",
                area: 120.0,
            },
        ]
    }

    #[test]
    fn unconstrained_criteria_is_identity() {
        let all = units();
        let criteria = Criteria::new().with("status", Selection::Any);
        assert!(criteria.is_unconstrained());
        assert_eq!(filter(&all, &criteria), all);
    }

    #[test]
    fn selection_and_query_combine_with_and() {
        let criteria = Criteria::new()
            .with_query("A10")
            .with("status", Selection::is("available"));
        let result = filter(&units(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].number, "A101");
    }

    #[test]
    fn query_is_case_insensitive() {
        let criteria = Criteria::new().with_query("a10");
        let result = filter(&units(), &criteria);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn selection_is_case_sensitive() {
        let criteria = Criteria::new().with("status", Selection::is("Available"));
        assert!(filter(&units(), &criteria).is_empty());
    }

    #[test]
    fn numeric_fields_search_as_text() {
        let criteria = Criteria::new().with_query("920");
        let result = filter(&units(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].number, "A102");
    }

    #[test]
    fn malformed_numeric_query_matches_nothing() {
        let criteria = Criteria::new().with_query("92x0");
        assert!(filter(&units(), &criteria).is_empty());
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let criteria = Criteria::new().with("status", Selection::is("available"));
        let once = filter(&units(), &criteria);
        assert_eq!(
            once.iter().map(|u| u.number.as_str()).collect::<Vec<_>>(),
            vec!["A101", "S101"]
        );
        assert_eq!(filter(&once, &criteria), once);
    }

    #[test]
    fn excluded_records_fail_a_clause() {
        let criteria = Criteria::new().with("status", Selection::is("available"));
        for unit in units() {
            let kept = filter(&[unit.clone()], &criteria).len() == 1;
            assert_eq!(kept, criteria.matches(&unit));
        }
    }

    #[test]
    fn unknown_selection_field_matches_nothing() {
        let criteria = Criteria::new().with("site", Selection::is("palm-towers"));
        assert!(filter(&units(), &criteria).is_empty());
    }

    #[test]
    fn parse_treats_all_as_any() {
        assert_eq!(Selection::parse(None), Selection::Any);
        assert_eq!(Selection::parse(Some("all")), Selection::Any);
        assert_eq!(Selection::parse(Some("sold")), Selection::is("sold"));
    }
}

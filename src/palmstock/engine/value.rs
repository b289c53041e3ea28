//! Field value types.
//!
//! [`FieldValue`] is the runtime representation a record hands the engine for
//! one of its fields. Categorical matching and free-text search both go
//! through it, so the rules for how a value compares and renders live here.

use chrono::NaiveDate;

/// A single field value as seen by the filter/aggregate engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-form text (names, emails, unit numbers, sites).
    Text(String),
    /// A closed-enumeration value in its wire form (e.g. "not-available").
    Keyword(&'static str),
    /// Integer quantity (floor numbers).
    Int(i64),
    /// Fractional quantity (area, price, deposit).
    Float(f64),
    /// Calendar date.
    Date(NaiveDate),
}

impl FieldValue {
    /// Exact, case-sensitive comparison against a selection value.
    ///
    /// Numeric and date values compare through their rendered text, which is
    /// what a categorical selector would have offered in the first place.
    pub fn matches_exactly(&self, wanted: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == wanted,
            FieldValue::Keyword(k) => *k == wanted,
            FieldValue::Int(_) | FieldValue::Float(_) | FieldValue::Date(_) => {
                self.render() == wanted
            }
        }
    }

    /// The value as display text, used as the free-text search haystack and
    /// as the category key for aggregation.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Keyword(k) => (*k).to_string(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Float(n) => n.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_matches_case_sensitively() {
        let value = FieldValue::Text("palm-towers".into());
        assert!(value.matches_exactly("palm-towers"));
        assert!(!value.matches_exactly("Palm-Towers"));
    }

    #[test]
    fn keyword_matches_wire_form() {
        let value = FieldValue::Keyword("not-available");
        assert!(value.matches_exactly("not-available"));
        assert!(!value.matches_exactly("not available"));
    }

    #[test]
    fn numbers_render_without_trailing_zeroes() {
        assert_eq!(FieldValue::Float(850.0).render(), "850");
        assert_eq!(FieldValue::Float(850.5).render(), "850.5");
        assert_eq!(FieldValue::Int(2).render(), "2");
    }

    #[test]
    fn numbers_match_through_rendered_text() {
        assert!(FieldValue::Float(450000.0).matches_exactly("450000"));
        assert!(!FieldValue::Float(450000.0).matches_exactly("450,000"));
    }

    #[test]
    fn dates_render_iso() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(FieldValue::Date(d).render(), "2024-01-15");
    }
}

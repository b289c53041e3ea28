//! Grouped counts and numeric roll-ups for summary cards and reports.

use super::Filterable;

/// Count records per category of `field`.
///
/// `cats` is the caller-supplied enumeration: its order is kept and
/// categories with no records still appear with a zero count, so a summary
/// row never silently drops a status. Records whose field value falls outside
/// `cats` (or is missing) are not counted.
pub fn aggregate<T: Filterable>(records: &[T], field: &str, cats: &[&str]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = cats.iter().map(|c| ((*c).to_string(), 0)).collect();
    for record in records {
        if let Some(value) = record.field(field) {
            let key = value.render();
            if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == key) {
                entry.1 += 1;
            }
        }
    }
    counts
}

/// Distinct values of `field` present in `records`, in first-seen order.
/// Supplies the enumeration for open groupings such as per-agent counts.
pub fn categories<T: Filterable>(records: &[T], field: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if let Some(value) = record.field(field) {
            let key = value.render();
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
    }
    seen
}

/// Sum a numeric projection over the collection.
pub fn sum_of<T>(records: &[T], f: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(f).sum()
}

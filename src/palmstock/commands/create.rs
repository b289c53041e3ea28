use crate::commands::{noun_title, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entity;
use crate::store::Collection;

/// Append an already-validated record. Validation (enum values, numeric
/// bounds) happens in the model constructors, so by the time a record
/// reaches here it is well-formed.
pub fn run<T: Entity>(collection: &mut Collection<T>, record: T) -> Result<CmdResult<T>> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} created: {}",
        noun_title::<T>(),
        record.reference()
    )));
    result.affected.push(record.clone());
    collection.insert(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Property, PropertyType};
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn create_appends_and_reports_success() {
        let mut fixture = StoreFixture::new();
        let property =
            Property::new("B301", PropertyType::Shop, 140.0, 200_000.0, 3, "palm-plaza").unwrap();

        let result = run(&mut fixture.store.properties, property).unwrap();

        assert_eq!(fixture.store.properties.len(), 1);
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("B301"));
    }

    #[test]
    fn create_then_remove_restores_the_collection() {
        let mut fixture = StoreFixture::seeded();
        let before: Vec<_> = fixture
            .store
            .properties
            .iter()
            .map(|p| p.id)
            .collect();

        let property =
            Property::new("B301", PropertyType::Shop, 140.0, 200_000.0, 3, "palm-plaza").unwrap();
        let created = run(&mut fixture.store.properties, property).unwrap();
        let new_id = created.affected[0].id;

        fixture.store.properties.remove(new_id).unwrap();
        let after: Vec<_> = fixture
            .store
            .properties
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn created_records_get_distinct_ids() {
        let mut fixture = StoreFixture::new();
        for number in ["B301", "B302", "B303"] {
            let p = Property::new(number, PropertyType::Shop, 100.0, 1000.0, 3, "palm-plaza")
                .unwrap();
            run(&mut fixture.store.properties, p).unwrap();
        }
        let mut ids: Vec<_> = fixture.store.properties.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}

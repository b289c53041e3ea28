use uuid::Uuid;

use crate::commands::{noun_title, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entity;
use crate::store::Collection;

/// Remove the record with `id`. An absent id surfaces `NotFound` (from the
/// collection) rather than silently doing nothing.
pub fn run<T: Entity>(collection: &mut Collection<T>, id: Uuid) -> Result<CmdResult<T>> {
    let removed = collection.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} removed: {}",
        noun_title::<T>(),
        removed.reference()
    )));
    result.affected.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::model::PropertyStatus;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn remove_takes_the_record_out() {
        let mut fixture = StoreFixture::new()
            .with_property("A101", PropertyStatus::Available, "palm-towers")
            .with_property("A102", PropertyStatus::Sold, "palm-towers");
        let id = fixture.store.properties.as_slice()[0].id;

        let result = run(&mut fixture.store.properties, id).unwrap();
        assert_eq!(result.affected[0].number, "A101");
        assert_eq!(fixture.store.properties.len(), 1);
        assert!(fixture.store.properties.get(id).is_none());
    }

    #[test]
    fn remove_missing_id_is_not_found() {
        let mut fixture = StoreFixture::seeded();
        let err = run(&mut fixture.store.properties, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StockError::NotFound { .. }));
    }
}

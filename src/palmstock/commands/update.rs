use uuid::Uuid;

use crate::commands::{noun_title, CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Entity;
use crate::store::Collection;

/// Merge a patch over the record with `id`, refreshing its last-updated
/// stamp. An absent id is an explicit `NotFound`, not a silent no-op, so
/// callers can tell "nothing matched" from "updated".
///
/// `apply` is the entity's patch (e.g. `PropertyPatch::apply`); it validates
/// before writing, so a rejected patch leaves the record untouched.
pub fn run<T, F>(collection: &mut Collection<T>, id: Uuid, apply: F) -> Result<CmdResult<T>>
where
    T: Entity,
    F: FnOnce(&mut T) -> Result<()>,
{
    let record = collection
        .get_mut(id)
        .ok_or(StockError::NotFound {
            what: T::NOUN,
            reference: id.to_string(),
        })?;

    apply(record)?;
    record.touch();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} updated: {}",
        noun_title::<T>(),
        record.reference()
    )));
    result.affected.push(record.clone());
    Ok(result)
}

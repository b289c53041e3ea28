use uuid::Uuid;

use crate::commands::{noun_title, CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::{ensure_transition, Lifecycle};
use crate::store::Collection;

/// Move a record to `new_status`, checked against the entity's lifecycle
/// table. A transition to the current status is a no-op reported at Info
/// level; anything outside the table is an `IllegalTransition` error.
pub fn run<T: Lifecycle>(
    collection: &mut Collection<T>,
    id: Uuid,
    new_status: T::Status,
) -> Result<CmdResult<T>> {
    let record = collection.get_mut(id).ok_or(StockError::NotFound {
        what: T::NOUN,
        reference: id.to_string(),
    })?;

    let mut result = CmdResult::default();
    if record.status() == new_status {
        result.add_message(CmdMessage::info(format!(
            "{} {} is already {}",
            noun_title::<T>(),
            record.reference(),
            new_status
        )));
        result.affected.push(record.clone());
        return Ok(result);
    }

    ensure_transition(record, new_status)?;
    record.set_status(new_status);
    record.touch();

    result.add_message(CmdMessage::success(format!(
        "{} {} is now {}",
        noun_title::<T>(),
        record.reference(),
        new_status
    )));
    result.affected.push(record.clone());
    Ok(result)
}

use crate::commands::CmdResult;
use crate::engine::{self, Criteria};
use crate::error::Result;
use crate::model::Entity;
use crate::store::Collection;

/// Apply `criteria` to the collection. Order is the collection's own;
/// unconstrained criteria list everything.
pub fn run<T: Entity>(collection: &Collection<T>, criteria: &Criteria) -> Result<CmdResult<T>> {
    let listed = engine::filter(collection.as_slice(), criteria);
    Ok(CmdResult::default().with_listed(listed))
}

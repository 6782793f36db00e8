//! Gift and achievement unlocks
//!
//! Both catalogs are static tables of [`UnlockDef`]s whose predicates read
//! only [`Aggregates`]: lifetime counters, reached forms, ticks, stats and the
//! gifts already unlocked. The bounded event log is never consulted, so an
//! unlock cannot be lost to log truncation.

mod achievements;
mod catalog;
mod gifts;

pub use achievements::{ACHIEVEMENTS, ACHIEVEMENT_DEFS};
pub use catalog::{Aggregates, Catalog, Predicate, UnlockDef};
pub use gifts::{GIFTS, GIFT_DEFS};

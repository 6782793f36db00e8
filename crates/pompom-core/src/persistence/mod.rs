//! Save records
//!
//! Saving goes through typed serde records. Loading is lenient: the raw JSON
//! value is read field by field, every field is sanitized on its own, and
//! legacy records are migrated before the event log is truncated. A record
//! that cannot be read at all yields a fresh pet, never an error or a panic.

mod codec;
mod migrate;
mod record;
mod sanitize;

pub use codec::{deserialize, event_from_json, event_to_json, from_json, serialize, to_json};
pub use codec::{LoadOutcome, LoadStatus};
pub use migrate::Migration;
pub use record::{SaveMeta, SaveRecord, SavedEvent, SavedMinigames, SavedPet, SAVE_VERSION};

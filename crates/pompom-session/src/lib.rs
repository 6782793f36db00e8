//! PomPom Session - App-layer driver for the pet engine
//!
//! `pompom-core` is pure and never touches the clock or storage. This crate
//! supplies those collaborators:
//! - `TickClock` turns elapsed wall-clock time into whole ticks
//! - `BlobStore` persists save records (`MemoryStore`, `FileStore`)
//! - `Session` drives one pet: ticks, actions, settings, reset and autosave
//! - `SessionConfig` is loaded from RON

mod clock;
mod config;
mod error;
mod session;
mod storage;

pub use clock::{wall_clock_ms, TickClock};
pub use config::{SessionConfig, DEFAULT_SAVE_INTERVAL_MS, DEFAULT_STORAGE_KEY, DEFAULT_TICK_MS};
pub use error::{Error, Result};
pub use session::{Session, StepReport};
pub use storage::{BlobStore, FileStore, MemoryStore};

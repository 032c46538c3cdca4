pub mod config;
pub mod error;
pub mod types;

pub use config::SheetConfig;
pub use error::{Result, SheetError};
pub use types::{Ability, CasterKind, EntryId, SaveKind, SpellLevel};

//! The incremental update writer: given a set of changed top-level
//! objects and the trailer they chain onto, emits the xref section and
//! trailer that together make an appended update byte-exact and readable
//! without touching a single byte of the document that precedes it.

pub mod change_tracker;
pub mod driver;
pub mod entry_table;
pub mod security;
pub mod stream_pipeline;
pub mod trailer;
pub mod xref;

pub use change_tracker::{ChangeTracker, ChangedObject};
pub use driver::{append_update, get_updated_objects};
pub use entry_table::{EntryTable, XrefEntry};
pub use security::SecurityHandler;
pub use trailer::PriorTrailer;
pub use xref::XrefKind;

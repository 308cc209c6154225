//! Store Module
//!
//! The record store: in-memory collections plus their flat-file persistence.
//!
//! ## Responsibilities
//! - Own the menu and customer collections for the lifetime of the process
//! - Load both collections at startup (first run seeds a sample menu)
//! - Rewrite a whole collection after every mutation
//! - Keep persistence behind [`StorageBackend`] so tests run in memory
//!
//! ## File Format
//! ```text
//! menu.txt                          customers.txt
//! ┌────┬──────┬──────────┬───────┬───────┐   ┌────┬──────┬─────────┐
//! │ id │ name │ category │ price │ stock │   │ id │ name │ contact │
//! └────┴──────┴──────────┴───────┴───────┘   └────┴──────┴─────────┘
//! one record per line, comma separated, no header,
//! fields quoted only when they contain a comma, quote or newline
//! ```

mod backend;
mod codec;
mod fs_backend;
mod mem_backend;
mod record_store;
mod sample;
mod table;

pub use backend::StorageBackend;
pub use codec::{read_records, write_records, Record};
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use record_store::{RecordStore, StartupReport};
pub use sample::sample_menu;
pub use table::{Keyed, Table};

//! Storage layer for the in-memory comment collection.
//!
//! # Modules
//!
//! - `memory`: the [`RecordStore`] owning the fetched records and applying
//!   local add/edit/delete

pub mod memory;

pub use memory::RecordStore;

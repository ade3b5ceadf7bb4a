//! Domain layer for the Commentary plugin.
//!
//! Core types and pure logic, independent of Zellij APIs: the comment
//! [`Record`], the filter/sort/paginate derivations, the add/edit form draft
//! and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Comment record model
//! - [`query`]: Filtering, sorting and pagination over records
//! - [`form`]: Form draft and required-field validation

pub mod error;
pub mod form;
pub mod query;
pub mod record;

pub use error::{CommentaryError, Result};
pub use form::{FormDraft, FormField};
pub use query::{PageSize, PageSlice, SortDirection, SortKey, SortSpec};
pub use record::Record;

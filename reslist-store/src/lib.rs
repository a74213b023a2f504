//! # reslist-store
//!
//! Access to the master document behind the resource list: reading its
//! rows, appending a submitted resource with a freshly assigned id, and
//! applying an edit submission onto an existing row.
//!
//! Ids are dense when freshly assigned (largest existing id plus one)
//! but nothing here relies on them staying dense. The document itself is
//! shared mutable state owned by whoever deploys the tool; no locking is
//! attempted here.

pub mod error;
pub mod master;
pub mod submission;

pub use error::{StoreError, StoreResult};
pub use master::{append_resource, edit_resource, read_records};
pub use submission::{parse_submission, Submission};

//! Job form drafts

pub mod draft;

pub use draft::{FieldChange, JobDraft};

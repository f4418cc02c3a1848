//! Adapters between raw inputs (files, job descriptions, keyword lists) and
//! the matching core.

pub mod job;
pub mod resume;
pub mod source;

//! Dataset de-identification
//!
//! Strips PHI-bearing attributes from a tag-keyed dataset and regenerates
//! the instance identifiers so the output can leave a trusted boundary.

mod phi;
mod uid;

pub use phi::{deidentify, PHI_TAGS, UID_TAGS};
pub use uid::generate_uid;

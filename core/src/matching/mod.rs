//! Equipment catalog matching
//!
//! Fuzzy-matches extracted manufacturer/model strings against a static
//! catalog of known imaging equipment, producing a confidence-scored
//! [`MatchResult`].

pub mod catalog;
pub mod identify;
pub mod score;

pub use catalog::{
    modality_full_name, DeviceEntry, ManufacturerEntry, MANUFACTURERS, MODALITY_NAMES,
};
pub use identify::{identify_device, MatchResult};
pub use score::match_score;

pub mod api;
pub mod deident;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod report;
pub mod types;

#[cfg(test)]
mod testutil;

pub use api::{DetectionReport, DeviceDetector};
pub use deident::{deidentify, generate_uid, PHI_TAGS, UID_TAGS};
pub use error::{DevidentError, Result};
pub use extraction::{DicomMetadata, ElementScanner, MetadataExtractor};
pub use matching::{identify_device, match_score, MatchResult};
pub use report::TextReport;
pub use types::*;

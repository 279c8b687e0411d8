pub mod metadata;
pub mod scanner;
pub mod tags;

pub use metadata::{DicomMetadata, MetadataExtractor};
pub use scanner::ElementScanner;
pub use tags::*;

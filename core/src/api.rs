use crate::error::Result;
use crate::extraction::{DicomMetadata, MetadataExtractor};
use crate::matching::{identify_device, MatchResult};

/// Main entry point for device identification
///
/// Runs metadata extraction and catalog matching over a DICOM byte stream
/// in one call.
///
/// # Example
///
/// ```
/// use devident_core::DeviceDetector;
///
/// // Minimal stream: 128-byte preamble, "DICM", then two explicit-VR
/// // elements for Manufacturer and Modality
/// let mut data = vec![0u8; 128];
/// data.extend_from_slice(b"DICM");
/// data.extend_from_slice(&[0x08, 0x00, 0x70, 0x00]); // (0008,0070)
/// data.extend_from_slice(b"LO");
/// data.extend_from_slice(&8u16.to_le_bytes());
/// data.extend_from_slice(b"SIEMENS ");
/// data.extend_from_slice(&[0x08, 0x00, 0x60, 0x00]); // (0008,0060)
/// data.extend_from_slice(b"CS");
/// data.extend_from_slice(&2u16.to_le_bytes());
/// data.extend_from_slice(b"MR");
///
/// let report = DeviceDetector::detect(&data).unwrap();
/// assert!(report.device.detected);
/// assert_eq!(report.device.manufacturer.as_deref(), Some("Siemens Healthineers"));
/// assert_eq!(
///     report.device.modality_full_name.as_deref(),
///     Some("Magnetic Resonance Imaging"),
/// );
/// ```
pub struct DeviceDetector;

impl DeviceDetector {
    /// Extracts metadata and identifies the device behind it
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not recognizable as a DICOM
    /// stream. An unrecognized device is not an error; see
    /// [`MatchResult::detected`].
    pub fn detect(data: &[u8]) -> Result<DetectionReport> {
        let metadata = MetadataExtractor::extract(data)?;
        let device = identify_device(&metadata);
        Ok(DetectionReport { metadata, device })
    }
}

/// Combined outcome of extraction and identification
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DetectionReport {
    /// Metadata the match was based on
    pub metadata: DicomMetadata,

    /// Catalog match outcome
    pub device: MatchResult,
}


#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::*;
    use crate::extraction::tags::MANUFACTURER;
    use crate::testutil::DicomBuilder;

    #[test]
    fn test_match_result_keeps_nulls() {
        let data = DicomBuilder::new()
            .short_element(MANUFACTURER, "LO", b"SIEMENS")
            .build();

        let report = DeviceDetector::detect(&data).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["device"]["detected"], serde_json::json!(true));
        assert_eq!(json["device"]["manufacturer"], serde_json::json!("Siemens Healthineers"));
        // Unmatched fields serialize as explicit nulls on the match side
        assert_eq!(json["device"]["deviceModel"], serde_json::Value::Null);
        assert_eq!(json["device"]["modalityFullName"], serde_json::Value::Null);
        // ...while absent metadata fields are omitted entirely
        assert!(json["metadata"].get("modelName").is_none());
        assert_eq!(json["metadata"]["manufacturer"], serde_json::json!("SIEMENS"));
    }
}

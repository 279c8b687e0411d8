use crate::error::Result;
use crate::extraction::scanner::ElementScanner;
use crate::extraction::tags::{
    DEVICE_SERIAL_NUMBER, MANUFACTURER, MANUFACTURER_MODEL_NAME, MODALITY, SOFTWARE_VERSIONS,
    STATION_NAME, STUDY_DESCRIPTION,
};
use crate::types::Tag;

/// Attributes the extractor asks the scanner for
const FIELDS_OF_INTEREST: [Tag; 7] = [
    MANUFACTURER,
    MANUFACTURER_MODEL_NAME,
    DEVICE_SERIAL_NUMBER,
    MODALITY,
    STUDY_DESCRIPTION,
    STATION_NAME,
    SOFTWARE_VERSIONS,
];

/// Extracted device-identification metadata
///
/// Every field is optional: an attribute that is missing, truncated, or
/// empty after trimming is reported as `None`, never as an error.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct DicomMetadata {
    /// Manufacturer, upper-cased for catalog matching
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub manufacturer: Option<String>,

    /// Manufacturer's model name, as written in the file
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub model_name: Option<String>,

    /// Device serial number
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub serial_number: Option<String>,

    /// Modality code (CT, MR, US, ...)
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub modality: Option<String>,

    /// Study description
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub study_description: Option<String>,

    /// Station name
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub station_name: Option<String>,

    /// Software version string
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub software_version: Option<String>,
}

/// Main extractor for device-identification metadata
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extracts all device-identification fields from a DICOM byte stream
    ///
    /// The scanner walks the stream once, collecting all seven attributes of
    /// interest; raw values are then normalized (null padding removed,
    /// whitespace trimmed, manufacturer upper-cased).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not recognizable as a DICOM stream.
    /// Individual missing attributes are not errors.
    pub fn extract(data: &[u8]) -> Result<DicomMetadata> {
        let scanner = ElementScanner::new(data)?;
        let mut values = scanner.find_all(&FIELDS_OF_INTEREST);
        let mut take = |tag: Tag| values.remove(&tag).and_then(normalize);

        Ok(DicomMetadata {
            manufacturer: take(MANUFACTURER).map(|s| s.to_uppercase()),
            model_name: take(MANUFACTURER_MODEL_NAME),
            serial_number: take(DEVICE_SERIAL_NUMBER),
            modality: take(MODALITY),
            study_description: take(STUDY_DESCRIPTION),
            station_name: take(STATION_NAME),
            software_version: take(SOFTWARE_VERSIONS),
        })
    }
}

/// Decodes raw value bytes into a trimmed string
///
/// Null padding is removed wherever it appears, then surrounding whitespace
/// is trimmed. A value that is empty afterwards counts as absent.
fn normalize(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw).replace('\0', "");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

use crate::extraction::DicomMetadata;
use crate::matching::catalog::{modality_full_name, ManufacturerEntry, MANUFACTURERS};
use crate::matching::score::match_score;

/// Scores at or below this never accept a manufacturer
const MIN_MANUFACTURER_SCORE: f64 = 0.7;

/// Confidence bonus for a recognized model keyword
const MODEL_KEYWORD_BONUS: f64 = 0.2;

/// Outcome of matching extracted metadata against the equipment catalog
///
/// A failed or low-confidence match is reported through `detected = false`,
/// never as an error. Serialized output keeps absent fields as explicit
/// nulls.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct MatchResult {
    /// Whether a catalog manufacturer was accepted
    pub detected: bool,

    /// Catalog trade name of the accepted manufacturer
    pub manufacturer: Option<String>,

    /// Matched model keyword
    pub device_model: Option<String>,

    /// Device type of the matched model
    pub device_type: Option<String>,

    /// Reported modality code
    pub modality: Option<String>,

    /// Full name of the reported modality
    pub modality_full_name: Option<String>,

    /// Match confidence in [0, 1]
    pub confidence: f64,
}

/// Identifies the imaging device described by extracted metadata
///
/// # Algorithm
///
/// 1. Without a manufacturer string there is nothing to match; return an
///    undetected result.
/// 2. Score the manufacturer against every catalog key and keep the best
///    entry scoring above 0.7. Ties keep the earlier catalog entry.
/// 3. On acceptance, search the entry's device keywords in the model name;
///    the first hit sets the model, device type and modality, and raises
///    confidence by 0.2 (capped at 1.0).
/// 4. A modality carried by the record itself overrides any inferred one
///    and supplies the human-readable modality name, whether or not a
///    manufacturer was accepted.
pub fn identify_device(metadata: &DicomMetadata) -> MatchResult {
    let mut result = MatchResult::default();

    let manufacturer = match metadata.manufacturer.as_deref() {
        Some(m) => m,
        None => return result,
    };

    let mut best: Option<(&ManufacturerEntry, f64)> = None;
    for entry in MANUFACTURERS {
        let score = match_score(manufacturer, entry.key);
        if score > MIN_MANUFACTURER_SCORE && best.map_or(true, |(_, s)| score > s) {
            best = Some((entry, score));
        }
    }

    if let Some((entry, score)) = best {
        result.detected = true;
        result.manufacturer = Some(entry.full_name.to_string());
        result.confidence = score;

        if let Some(model) = metadata.model_name.as_deref() {
            let model_upper = model.to_uppercase();
            for device in entry.devices {
                if model_upper.contains(&device.keyword.to_uppercase()) {
                    result.device_model = Some(device.keyword.to_string());
                    result.device_type = Some(device.device_type.to_string());
                    result.modality = Some(device.modality.to_string());
                    result.confidence = (result.confidence + MODEL_KEYWORD_BONUS).min(1.0);
                    break;
                }
            }
        }
    }

    // The record's own modality wins over one inferred from the model
    if let Some(code) = metadata.modality.as_deref() {
        result.modality = Some(code.to_string());
        result.modality_full_name = Some(
            modality_full_name(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.to_string()),
        );
    }

    result
}

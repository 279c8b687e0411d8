use crate::deident::uid::generate_uid;
use crate::extraction::tags::{
    OPERATORS_NAME, PATIENT_ADDRESS, PATIENT_AGE, PATIENT_BIRTH_DATE, PATIENT_ID, PATIENT_NAME,
    PATIENT_SEX, PATIENT_TELEPHONE_NUMBERS, PERFORMING_PHYSICIAN_NAME, PHYSICIANS_OF_RECORD,
    REFERRING_PHYSICIAN_NAME, REQUEST_ATTRIBUTES_SEQUENCE, SERIES_INSTANCE_UID, SOP_INSTANCE_UID,
    STUDY_INSTANCE_UID,
};
use crate::types::{Tag, TagMap, TagValue};

/// Attributes stripped outright during de-identification
pub const PHI_TAGS: &[Tag] = &[
    PATIENT_NAME,
    PATIENT_ID,
    PATIENT_BIRTH_DATE,
    PATIENT_SEX,
    PATIENT_AGE,
    PATIENT_ADDRESS,
    PATIENT_TELEPHONE_NUMBERS,
    REFERRING_PHYSICIAN_NAME,
    PHYSICIANS_OF_RECORD,
    PERFORMING_PHYSICIAN_NAME,
    OPERATORS_NAME,
    REQUEST_ATTRIBUTES_SEQUENCE,
];

/// Instance identifiers regenerated during de-identification
pub const UID_TAGS: &[Tag] = &[STUDY_INSTANCE_UID, SERIES_INSTANCE_UID, SOP_INSTANCE_UID];

/// Produces a de-identified copy of a dataset
///
/// PHI attributes are removed entirely; study, series and SOP instance
/// identifiers are replaced with freshly generated values when present.
/// Every other attribute is carried over unchanged, and the input is never
/// modified.
///
/// PHI removal is idempotent. Identifier regeneration is not: each call
/// issues new values.
pub fn deidentify(dataset: &TagMap) -> TagMap {
    let mut out = TagMap::new();

    for (&tag, value) in dataset {
        if PHI_TAGS.contains(&tag) {
            continue;
        }
        if UID_TAGS.contains(&tag) {
            out.insert(tag, TagValue::Text(generate_uid()));
        } else {
            out.insert(tag, value.clone());
        }
    }

    out
}

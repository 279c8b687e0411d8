use crate::types::Tag;

// Device Identification Tags
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);

// Study Information Tags
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);

// Patient Positioning Tags
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0037);
pub const IMAGE_POSITION: Tag = Tag(0x0020, 0x0032);

// Image Parameter Tags
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);

// Acquisition Parameter Tags
pub const KVP: Tag = Tag(0x0018, 0x0060);
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);

// Quality Control Tags
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);

// Instance Identification Tags
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);

// Patient Identity Tags (PHI)
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);

// Physician/Operator Tags (PHI)
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);

/// A dictionary entry: a tag and its semantic name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefinition {
    pub tag: Tag,
    pub name: &'static str,
}

impl TagDefinition {
    const fn new(tag: Tag, name: &'static str) -> Self {
        Self { tag, name }
    }
}

/// Registry of the attributes this library understands
pub const TAG_DICTIONARY: &[TagDefinition] = &[
    TagDefinition::new(MANUFACTURER, "Manufacturer"),
    TagDefinition::new(MANUFACTURER_MODEL_NAME, "ManufacturerModelName"),
    TagDefinition::new(DEVICE_SERIAL_NUMBER, "DeviceSerialNumber"),
    TagDefinition::new(SOFTWARE_VERSIONS, "SoftwareVersions"),
    TagDefinition::new(STATION_NAME, "StationName"),
    TagDefinition::new(INSTITUTIONAL_DEPARTMENT_NAME, "InstitutionalDepartmentName"),
    TagDefinition::new(MODALITY, "Modality"),
    TagDefinition::new(STUDY_DESCRIPTION, "StudyDescription"),
    TagDefinition::new(SERIES_DESCRIPTION, "SeriesDescription"),
    TagDefinition::new(PROTOCOL_NAME, "ProtocolName"),
    TagDefinition::new(PATIENT_POSITION, "PatientPosition"),
    TagDefinition::new(IMAGE_ORIENTATION, "ImageOrientation"),
    TagDefinition::new(IMAGE_POSITION, "ImagePosition"),
    TagDefinition::new(ROWS, "Rows"),
    TagDefinition::new(COLUMNS, "Columns"),
    TagDefinition::new(BITS_ALLOCATED, "BitsAllocated"),
    TagDefinition::new(PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation"),
    TagDefinition::new(KVP, "KVP"),
    TagDefinition::new(EXPOSURE_TIME, "ExposureTime"),
    TagDefinition::new(SLICE_THICKNESS, "SliceThickness"),
    TagDefinition::new(MAGNETIC_FIELD_STRENGTH, "MagneticFieldStrength"),
    TagDefinition::new(REPETITION_TIME, "RepetitionTime"),
    TagDefinition::new(ECHO_TIME, "EchoTime"),
    TagDefinition::new(IMAGE_TYPE, "ImageType"),
    TagDefinition::new(ACQUISITION_DATE, "AcquisitionDate"),
    TagDefinition::new(ACQUISITION_TIME, "AcquisitionTime"),
    TagDefinition::new(STUDY_INSTANCE_UID, "StudyInstanceUID"),
    TagDefinition::new(SERIES_INSTANCE_UID, "SeriesInstanceUID"),
    TagDefinition::new(SOP_INSTANCE_UID, "SOPInstanceUID"),
    TagDefinition::new(PATIENT_NAME, "PatientName"),
    TagDefinition::new(PATIENT_ID, "PatientID"),
    TagDefinition::new(PATIENT_BIRTH_DATE, "PatientBirthDate"),
    TagDefinition::new(PATIENT_SEX, "PatientSex"),
    TagDefinition::new(PATIENT_AGE, "PatientAge"),
    TagDefinition::new(PATIENT_ADDRESS, "PatientAddress"),
    TagDefinition::new(PATIENT_TELEPHONE_NUMBERS, "PatientTelephoneNumbers"),
    TagDefinition::new(REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName"),
    TagDefinition::new(PHYSICIANS_OF_RECORD, "PhysiciansOfRecord"),
    TagDefinition::new(PERFORMING_PHYSICIAN_NAME, "PerformingPhysicianName"),
    TagDefinition::new(OPERATORS_NAME, "OperatorsName"),
    TagDefinition::new(REQUEST_ATTRIBUTES_SEQUENCE, "RequestAttributesSequence"),
];

/// Looks up the semantic name of a tag
///
/// Returns `None` for tags outside the registry.
pub fn tag_name(tag: Tag) -> Option<&'static str> {
    TAG_DICTIONARY.iter().find(|d| d.tag == tag).map(|d| d.name)
}

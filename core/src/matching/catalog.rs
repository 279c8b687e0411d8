/// One model keyword a manufacturer's equipment is known by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceEntry {
    /// Keyword searched for (case-insensitively) in the model name
    pub keyword: &'static str,
    /// Device type reported on a keyword match
    pub device_type: &'static str,
    /// Modality code the device family produces
    pub modality: &'static str,
}

impl DeviceEntry {
    const fn new(
        keyword: &'static str,
        device_type: &'static str,
        modality: &'static str,
    ) -> Self {
        Self {
            keyword,
            device_type,
            modality,
        }
    }
}

/// One catalog manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerEntry {
    /// Upper-cased key matched against the Manufacturer attribute
    pub key: &'static str,
    /// Trade name reported on a successful match
    pub full_name: &'static str,
    /// Headquarters country
    pub country: &'static str,
    /// Known device families, in match-priority order
    pub devices: &'static [DeviceEntry],
}

/// Equipment catalog
///
/// Order matters twice: manufacturer entries break score ties first-wins,
/// and within an entry the first device keyword found in the model name is
/// the one reported.
pub const MANUFACTURERS: &[ManufacturerEntry] = &[
    ManufacturerEntry {
        key: "GE MEDICAL SYSTEMS",
        full_name: "GE Healthcare",
        country: "USA",
        devices: &[
            DeviceEntry::new("Revolution CT", "CT Scanner", "CT"),
            DeviceEntry::new("Optima", "X-Ray / CT", "CR/CT"),
            DeviceEntry::new("Discovery", "MRI / PET-CT", "MR/PT"),
            DeviceEntry::new("LOGIQ", "Ultrasound", "US"),
            DeviceEntry::new("Senographe", "Mammography", "MG"),
            DeviceEntry::new("Definium", "Digital Radiography", "DX"),
        ],
    },
    ManufacturerEntry {
        key: "SIEMENS",
        full_name: "Siemens Healthineers",
        country: "Germany",
        devices: &[
            DeviceEntry::new("SOMATOM", "CT Scanner", "CT"),
            DeviceEntry::new("MAGNETOM", "MRI Scanner", "MR"),
            DeviceEntry::new("Artis", "Angiography", "XA"),
            DeviceEntry::new("ACUSON", "Ultrasound", "US"),
            DeviceEntry::new("Luminos", "Fluoroscopy", "RF"),
            DeviceEntry::new("MAMMOMAT", "Mammography", "MG"),
        ],
    },
    ManufacturerEntry {
        key: "PHILIPS",
        full_name: "Philips Healthcare",
        country: "Netherlands",
        devices: &[
            DeviceEntry::new("Ingenuity", "PET-CT / CT", "PT/CT"),
            DeviceEntry::new("Achieva", "MRI Scanner", "MR"),
            DeviceEntry::new("Azurion", "Interventional X-ray", "XA"),
            DeviceEntry::new("EPIQ", "Ultrasound", "US"),
            DeviceEntry::new("MicroDose", "Mammography", "MG"),
            DeviceEntry::new("DigitalDiagnost", "Digital Radiography", "DX"),
        ],
    },
    ManufacturerEntry {
        key: "CANON",
        full_name: "Canon Medical Systems",
        country: "Japan",
        devices: &[
            DeviceEntry::new("Aquilion", "CT Scanner", "CT"),
            DeviceEntry::new("Vantage", "MRI Scanner", "MR"),
            DeviceEntry::new("Aplio", "Ultrasound", "US"),
            DeviceEntry::new("Alphenix", "Angiography", "XA"),
        ],
    },
    ManufacturerEntry {
        key: "FUJIFILM",
        full_name: "Fujifilm Medical Systems",
        country: "Japan",
        devices: &[
            DeviceEntry::new("SCENARIA", "CT Scanner", "CT"),
            DeviceEntry::new("FDR", "Digital Radiography", "DX"),
            DeviceEntry::new("AMULET", "Mammography", "MG"),
        ],
    },
    ManufacturerEntry {
        key: "HOLOGIC",
        full_name: "Hologic Inc.",
        country: "USA",
        devices: &[
            DeviceEntry::new("Selenia", "Mammography", "MG"),
            DeviceEntry::new("Dimensions", "Tomosynthesis", "MG"),
            DeviceEntry::new("Affirm", "Breast Biopsy", "MG"),
        ],
    },
    ManufacturerEntry {
        key: "CARESTREAM",
        full_name: "Carestream Health",
        country: "USA",
        devices: &[
            DeviceEntry::new("DRX", "Digital Radiography", "DX"),
            DeviceEntry::new("OnSight", "Extremity Imaging", "DX"),
        ],
    },
    ManufacturerEntry {
        key: "AGFA",
        full_name: "Agfa Healthcare",
        country: "Belgium",
        devices: &[
            DeviceEntry::new("DR", "Digital Radiography", "DX"),
            DeviceEntry::new("CR", "Computed Radiography", "CR"),
        ],
    },
    ManufacturerEntry {
        key: "HITACHI",
        full_name: "Hitachi Healthcare",
        country: "Japan",
        devices: &[
            DeviceEntry::new("ECLOS", "MRI Scanner", "MR"),
            DeviceEntry::new("ARIETTA", "Ultrasound", "US"),
        ],
    },
    ManufacturerEntry {
        key: "SAMSUNG",
        full_name: "Samsung Medison",
        country: "South Korea",
        devices: &[
            DeviceEntry::new("HERA", "Ultrasound", "US"),
            DeviceEntry::new("RS80A", "Premium Ultrasound", "US"),
        ],
    },
];

/// Human-readable names for modality codes
pub const MODALITY_NAMES: &[(&str, &str)] = &[
    ("CR", "Computed Radiography"),
    ("CT", "Computed Tomography"),
    ("MR", "Magnetic Resonance Imaging"),
    ("US", "Ultrasound"),
    ("XA", "X-Ray Angiography"),
    ("RF", "Radiofluoroscopy"),
    ("DX", "Digital Radiography"),
    ("MG", "Mammography"),
    ("PT", "Positron Emission Tomography"),
    ("NM", "Nuclear Medicine"),
    ("OT", "Other"),
    ("BI", "Biomagnetic Imaging"),
    ("ES", "Endoscopy"),
    ("GM", "General Microscopy"),
];

/// Looks up the full name of a modality code
///
/// Returns `None` for codes outside the table.
pub fn modality_full_name(code: &str) -> Option<&'static str> {
    MODALITY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_starts_with_ge() {
        assert_eq!(MANUFACTURERS[0].key, "GE MEDICAL SYSTEMS");
        assert_eq!(MANUFACTURERS[0].full_name, "GE Healthcare");
        assert_eq!(MANUFACTURERS[0].country, "USA");
        assert_eq!(MANUFACTURERS[0].devices[0].keyword, "Revolution CT");
    }

    #[test]
    fn test_catalog_keys_are_upper_case_and_unique() {
        let mut seen = HashSet::new();
        for entry in MANUFACTURERS {
            assert_eq!(entry.key, entry.key.to_uppercase(), "{}", entry.key);
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
    }

    #[test]
    fn test_every_manufacturer_has_devices() {
        for entry in MANUFACTURERS {
            assert!(!entry.devices.is_empty(), "{} has no devices", entry.key);
            for device in entry.devices {
                assert!(!device.keyword.is_empty());
                assert!(!device.device_type.is_empty());
                assert!(!device.modality.is_empty());
            }
        }
    }

    #[test]
    fn test_modality_full_name_lookup() {
        assert_eq!(modality_full_name("CT"), Some("Computed Tomography"));
        assert_eq!(modality_full_name("MG"), Some("Mammography"));
        assert_eq!(modality_full_name("ZZ"), None);
    }

    #[test]
    fn test_modality_codes_are_unique() {
        let mut seen = HashSet::new();
        for (code, _) in MODALITY_NAMES {
            assert!(seen.insert(*code), "duplicate modality code {}", code);
        }
    }
}

use crate::api::DetectionReport;
use std::fmt;

/// Text report formatter for a detection outcome
pub struct TextReport<'a> {
    report: &'a DetectionReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a DetectionReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let device = &self.report.device;
        let metadata = &self.report.metadata;

        writeln!(f, "Device Identification")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Detected:       {}", device.detected)?;
        writeln!(
            f,
            "Manufacturer:   {}",
            device.manufacturer.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Model:          {}",
            device.device_model.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Device Type:    {}",
            device.device_type.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Modality:       {}",
            device.modality.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Modality Name:  {}",
            device.modality_full_name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Confidence:     {:.2}", device.confidence)?;
        writeln!(f)?;

        writeln!(f, "Extracted Metadata")?;
        writeln!(f, "------------------")?;
        writeln!(
            f,
            "Manufacturer:   {}",
            metadata.manufacturer.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Model Name:     {}",
            metadata.model_name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Serial Number:  {}",
            metadata.serial_number.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Station:        {}",
            metadata.station_name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Software:       {}",
            metadata.software_version.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Study:          {}",
            metadata.study_description.as_deref().unwrap_or("unknown")
        )?;

        Ok(())
    }
}

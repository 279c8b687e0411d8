//! Synthetic DICOM streams for tests

use crate::types::Tag;

/// Builds synthetic DICOM byte streams element by element
///
/// Streams are little-endian throughout, matching what the scanner reads.
pub struct DicomBuilder {
    data: Vec<u8>,
}

impl DicomBuilder {
    /// Starts a stream with the 128-byte preamble and "DICM" marker
    pub fn new() -> Self {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        Self { data }
    }

    /// Starts a stream with no preamble, opening directly with elements
    pub fn headerless() -> Self {
        Self { data: Vec::new() }
    }

    /// Appends an explicit-VR element with a 16-bit length field
    pub fn short_element(mut self, tag: Tag, vr: &str, value: &[u8]) -> Self {
        self.push_tag(tag);
        self.data.extend_from_slice(vr.as_bytes());
        self.data.extend_from_slice(&(value.len() as u16).to_le_bytes());
        self.data.extend_from_slice(value);
        self
    }

    /// Appends an explicit-VR element with reserved bytes and a 32-bit
    /// length field
    pub fn long_element(mut self, tag: Tag, vr: &str, value: &[u8]) -> Self {
        self.push_tag(tag);
        self.data.extend_from_slice(vr.as_bytes());
        self.data.extend_from_slice(&[0, 0]);
        self.data.extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.data.extend_from_slice(value);
        self
    }

    /// Appends an implicit-VR element (32-bit length, no VR code)
    pub fn implicit_element(mut self, tag: Tag, value: &[u8]) -> Self {
        self.push_tag(tag);
        self.data.extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.data.extend_from_slice(value);
        self
    }

    /// Appends a short-form element whose declared length disagrees with
    /// the bytes that follow
    pub fn truncated_element(mut self, tag: Tag, vr: &str, declared: u16, value: &[u8]) -> Self {
        self.push_tag(tag);
        self.data.extend_from_slice(vr.as_bytes());
        self.data.extend_from_slice(&declared.to_le_bytes());
        self.data.extend_from_slice(value);
        self
    }

    /// Appends raw bytes verbatim
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Finishes the stream
    pub fn build(self) -> Vec<u8> {
        self.data
    }

    fn push_tag(&mut self, tag: Tag) {
        self.data.extend_from_slice(&tag.0.to_le_bytes());
        self.data.extend_from_slice(&tag.1.to_le_bytes());
    }
}

use crate::error::{DevidentError, Result};
use crate::extraction::tags::tag_name;
use crate::types::{LengthForm, Tag, Vr};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

/// Offset of the magic marker in a conformant stream
const MAGIC_OFFSET: usize = 128;

/// The 4-byte marker following the preamble
const MAGIC: &[u8; 4] = b"DICM";

/// Group numbers a headerless stream may plausibly open with
const HEADERLESS_GROUPS: [u16; 2] = [0x0002, 0x0008];

/// Byte-granularity element scanner over a DICOM stream
///
/// Walks the buffer one byte at a time looking for requested (group, element)
/// pairs; this is deliberately not a structural parse. Declared lengths are
/// only consulted once a tag matches, so unrelated content (including nested
/// sequences) is simply slid over. Element headers are read little-endian:
///
/// - explicit VR, short form: 2-byte VR code, 16-bit length, value 8 bytes
///   after the tag
/// - explicit VR, long form (OB, OF, OW, SQ, UN, UT): 2-byte VR code,
///   2 reserved bytes, 32-bit length, value 12 bytes after the tag
/// - implicit VR: 32-bit length, value 8 bytes after the tag
///
/// A matched element whose declared length runs past the buffer is logged and
/// skipped; a later occurrence of the same tag can still satisfy the search.
#[derive(Debug)]
pub struct ElementScanner<'a> {
    data: &'a [u8],
    origin: usize,
}

impl<'a> ElementScanner<'a> {
    /// Creates a scanner after checking the stream's format
    ///
    /// Conformant streams carry a 128-byte preamble and the "DICM" marker at
    /// offset 128; scanning then starts at the marker. Headerless streams
    /// are accepted when one of their first two 16-bit words is a plausible
    /// leading group number, and scanning starts at offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`DevidentError::InvalidFormat`] if neither check passes.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let origin = Self::check_format(data)?;
        Ok(Self { data, origin })
    }

    fn check_format(data: &[u8]) -> Result<usize> {
        if data.len() >= MAGIC_OFFSET + MAGIC.len()
            && &data[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC.len()] == MAGIC
        {
            return Ok(MAGIC_OFFSET);
        }

        // Legacy streams may omit the preamble and open directly with a
        // data element.
        if data.len() >= 4 {
            let first = u16::from_le_bytes([data[0], data[1]]);
            let second = u16::from_le_bytes([data[2], data[3]]);
            if HEADERLESS_GROUPS.contains(&first) || HEADERLESS_GROUPS.contains(&second) {
                return Ok(0);
            }
        }

        Err(DevidentError::InvalidFormat(
            "no DICM marker at offset 128 and no recognizable leading element".to_string(),
        ))
    }

    /// Finds a single tag, returning its raw value bytes
    pub fn find(&self, tag: Tag) -> Option<&'a [u8]> {
        self.find_all(std::slice::from_ref(&tag)).remove(&tag)
    }

    /// Walks the stream once, collecting the first readable occurrence of
    /// every requested tag
    ///
    /// Tags never encountered are absent from the returned map; that is not
    /// an error. The walk stops early once every requested tag is resolved.
    pub fn find_all(&self, tags: &[Tag]) -> BTreeMap<Tag, &'a [u8]> {
        let mut found = BTreeMap::new();
        let mut remaining: BTreeSet<Tag> = tags.iter().copied().collect();
        if remaining.is_empty() {
            return found;
        }

        let mut i = self.origin;
        // Smallest decodable header is 8 bytes: tag plus either VR code and
        // 16-bit length, or an implicit 32-bit length.
        while i + 8 <= self.data.len() {
            let group = u16::from_le_bytes([self.data[i], self.data[i + 1]]);
            let element = u16::from_le_bytes([self.data[i + 2], self.data[i + 3]]);
            let tag = Tag(group, element);

            if remaining.contains(&tag) {
                match self.read_value(i, tag) {
                    Ok(value) => {
                        remaining.remove(&tag);
                        found.insert(tag, value);
                        if remaining.is_empty() {
                            break;
                        }
                    }
                    Err(e) => {
                        let name = tag_name(tag).unwrap_or("unknown attribute");
                        warn!("Skipping {} at offset {}: {}", name, i, e);
                    }
                }
            }

            i += 1;
        }

        found
    }

    /// Decodes the value of the element whose tag starts at `at`
    ///
    /// The caller guarantees 8 header bytes are available.
    fn read_value(&self, at: usize, tag: Tag) -> Result<&'a [u8]> {
        let data = self.data;

        let (value_start, length) = match Vr::from_bytes(data[at + 4], data[at + 5]) {
            Some(vr) if vr.length_form() == LengthForm::Long => {
                if at + 12 > data.len() {
                    return Err(DevidentError::TruncatedElement {
                        tag,
                        needed: 4,
                        available: data.len() - (at + 8),
                    });
                }
                let length = u32::from_le_bytes([
                    data[at + 8],
                    data[at + 9],
                    data[at + 10],
                    data[at + 11],
                ]);
                (at + 12, length as usize)
            }
            Some(_) => {
                let length = u16::from_le_bytes([data[at + 6], data[at + 7]]);
                (at + 8, length as usize)
            }
            None => {
                let length = u32::from_le_bytes([
                    data[at + 4],
                    data[at + 5],
                    data[at + 6],
                    data[at + 7],
                ]);
                (at + 8, length as usize)
            }
        };

        if length > data.len() - value_start {
            return Err(DevidentError::TruncatedElement {
                tag,
                needed: length,
                available: data.len() - value_start,
            });
        }

        Ok(&data[value_start..value_start + length])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{MANUFACTURER, MODALITY, STATION_NAME};
    use crate::testutil::DicomBuilder;
    use rstest::rstest;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(ElementScanner::new(&[]).is_err());
    }

    #[test]
    fn test_rejects_short_garbage() {
        assert!(ElementScanner::new(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn test_rejects_non_dicom_bytes() {
        let data = b"This is just some text, definitely not an imaging file".to_vec();
        let err = ElementScanner::new(&data).unwrap_err();
        assert!(matches!(err, DevidentError::InvalidFormat(_)));
    }

    #[test]
    fn test_accepts_preamble_stream() {
        let data = DicomBuilder::new()
            .short_element(MANUFACTURER, "LO", b"SIEMENS ")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MANUFACTURER), Some(&b"SIEMENS "[..]));
    }

    #[test]
    fn test_accepts_headerless_stream() {
        let data = DicomBuilder::headerless()
            .short_element(MODALITY, "CS", b"CT")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"CT"[..]));
    }

    #[test]
    fn test_accepts_headerless_file_meta_group() {
        let data = DicomBuilder::headerless()
            .short_element(Tag(0x0002, 0x0010), "UI", b"1.2.840.10008.1.2.1\0")
            .short_element(MODALITY, "CS", b"CT")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"CT"[..]));
    }

    #[test]
    fn test_accepts_headerless_group_in_second_word() {
        // Only the second 16-bit word is a plausible leading group
        let data = DicomBuilder::headerless()
            .raw(&[0x34, 0x12])
            .short_element(MODALITY, "CS", b"CT")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"CT"[..]));
    }

    #[test]
    fn test_rejects_near_miss_leading_group() {
        // 0x0009 sits next to an accepted group but is not one
        let data = DicomBuilder::headerless()
            .short_element(Tag(0x0009, 0x0010), "LO", b"PRIVATE ")
            .build();
        let err = ElementScanner::new(&data).unwrap_err();
        assert!(matches!(err, DevidentError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_garbage_despite_dicom_word_elsewhere() {
        // "DICM" must sit exactly at offset 128
        let mut data = b"DICM".to_vec();
        data.extend_from_slice(&[0xAB; 200]);
        assert!(ElementScanner::new(&data).is_err());
    }

    #[rstest]
    #[case("AE")]
    #[case("CS")]
    #[case("DA")]
    #[case("LO")]
    #[case("PN")]
    #[case("SH")]
    #[case("UI")]
    fn test_short_form_value_starts_8_bytes_in(#[case] vr: &str) {
        let data = DicomBuilder::new()
            .short_element(STATION_NAME, vr, b"STATION1")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(STATION_NAME), Some(&b"STATION1"[..]));
    }

    #[rstest]
    #[case("OB")]
    #[case("OF")]
    #[case("OW")]
    #[case("SQ")]
    #[case("UN")]
    #[case("UT")]
    fn test_long_form_value_starts_12_bytes_in(#[case] vr: &str) {
        let data = DicomBuilder::new()
            .long_element(STATION_NAME, vr, b"STATION1")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(STATION_NAME), Some(&b"STATION1"[..]));
    }

    #[test]
    fn test_unrecognized_vr_bytes_decode_as_implicit() {
        let data = DicomBuilder::new()
            .implicit_element(MODALITY, b"MR")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"MR"[..]));
    }

    #[test]
    fn test_match_at_odd_offset() {
        // The walk advances one byte at a time, so padding before an
        // element does not hide it.
        let data = DicomBuilder::new()
            .raw(&[0x00])
            .short_element(MODALITY, "CS", b"US")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"US"[..]));
    }

    #[test]
    fn test_absent_tag_is_none() {
        let data = DicomBuilder::new()
            .short_element(MODALITY, "CS", b"CT")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MANUFACTURER), None);
    }

    #[test]
    fn test_truncated_element_does_not_affect_others() {
        init_logs();
        let data = DicomBuilder::new()
            .truncated_element(MANUFACTURER, "LO", 0xFFFF, b"GE")
            .short_element(MODALITY, "CS", b"CT")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();

        let found = scanner.find_all(&[MANUFACTURER, MODALITY]);
        assert!(!found.contains_key(&MANUFACTURER));
        assert_eq!(found.get(&MODALITY).copied(), Some(&b"CT"[..]));
    }

    #[test]
    fn test_later_occurrence_recovers_truncated_tag() {
        init_logs();
        let data = DicomBuilder::new()
            .truncated_element(MODALITY, "CS", 0xFFFF, b"")
            .short_element(MODALITY, "CS", b"MG")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"MG"[..]));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let data = DicomBuilder::new()
            .short_element(MODALITY, "CS", b"CT")
            .short_element(MODALITY, "CS", b"MR")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(MODALITY), Some(&b"CT"[..]));
    }

    #[test]
    fn test_find_all_with_no_tags() {
        let data = DicomBuilder::new().build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert!(scanner.find_all(&[]).is_empty());
    }

    #[test]
    fn test_zero_length_value() {
        let data = DicomBuilder::new()
            .short_element(STATION_NAME, "SH", b"")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(scanner.find(STATION_NAME), Some(&b""[..]));
    }

    #[test]
    fn test_value_bytes_are_returned_raw() {
        // Padding is the caller's problem; the scanner reports declared bytes
        let data = DicomBuilder::new()
            .short_element(MANUFACTURER, "LO", b"GE MEDICAL SYSTEMS\0\0")
            .build();
        let scanner = ElementScanner::new(&data).unwrap();
        assert_eq!(
            scanner.find(MANUFACTURER),
            Some(&b"GE MEDICAL SYSTEMS\0\0"[..])
        );
    }
}

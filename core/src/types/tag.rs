use std::fmt;

/// A DICOM attribute tag: a (group, element) pair of 16-bit numbers
///
/// Tags are written `(GGGG,EEEE)` in hexadecimal, e.g. `(0008,0070)` for
/// Manufacturer. JSON tag maps use the concatenated form `"GGGGEEEE"`
/// instead, which is what [`Tag::to_hex8`] and [`Tag::from_hex8`] speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// Group number
    pub fn group(&self) -> u16 {
        self.0
    }

    /// Element number
    pub fn element(&self) -> u16 {
        self.1
    }

    /// Renders the tag in the 8-hex-digit form used by JSON tag maps
    pub fn to_hex8(&self) -> String {
        format!("{:04X}{:04X}", self.0, self.1)
    }

    /// Parses a tag from the 8-hex-digit form, e.g. `"0008103E"`
    ///
    /// Accepts upper or lower case. Returns `None` if the input is not
    /// exactly 8 hex digits.
    pub fn from_hex8(s: &str) -> Option<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let group = u16::from_str_radix(&s[..4], 16).ok()?;
        let element = u16::from_str_radix(&s[4..], 16).ok()?;
        Some(Tag(group, element))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex8())
    }
}

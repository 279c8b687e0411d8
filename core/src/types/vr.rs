use std::fmt;

/// Explicit value representation codes
///
/// The classic two-letter VR registry. A byte pair outside this registry is
/// not treated as an explicit VR; the scanner then falls back to implicit
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vr {
    Ae,
    As,
    At,
    Cs,
    Da,
    Ds,
    Dt,
    Fd,
    Fl,
    Is,
    Lo,
    Lt,
    Ob,
    Od,
    Of,
    Ow,
    Pn,
    Sh,
    Sl,
    Sq,
    Ss,
    St,
    Tm,
    Ui,
    Ul,
    Un,
    Us,
    Ut,
}

/// How an explicit VR encodes its value length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthForm {
    /// 16-bit length immediately after the VR code; value starts 8 bytes
    /// after the tag
    Short,
    /// 2 reserved bytes then a 32-bit length; value starts 12 bytes after
    /// the tag
    Long,
}

impl Vr {
    /// Every code in the registry
    pub const ALL: [Vr; 28] = [
        Vr::Ae,
        Vr::As,
        Vr::At,
        Vr::Cs,
        Vr::Da,
        Vr::Ds,
        Vr::Dt,
        Vr::Fd,
        Vr::Fl,
        Vr::Is,
        Vr::Lo,
        Vr::Lt,
        Vr::Ob,
        Vr::Od,
        Vr::Of,
        Vr::Ow,
        Vr::Pn,
        Vr::Sh,
        Vr::Sl,
        Vr::Sq,
        Vr::Ss,
        Vr::St,
        Vr::Tm,
        Vr::Ui,
        Vr::Ul,
        Vr::Un,
        Vr::Us,
        Vr::Ut,
    ];

    /// Parses the two raw header bytes into a registry code
    pub fn from_bytes(b0: u8, b1: u8) -> Option<Vr> {
        match (b0, b1) {
            (b'A', b'E') => Some(Vr::Ae),
            (b'A', b'S') => Some(Vr::As),
            (b'A', b'T') => Some(Vr::At),
            (b'C', b'S') => Some(Vr::Cs),
            (b'D', b'A') => Some(Vr::Da),
            (b'D', b'S') => Some(Vr::Ds),
            (b'D', b'T') => Some(Vr::Dt),
            (b'F', b'D') => Some(Vr::Fd),
            (b'F', b'L') => Some(Vr::Fl),
            (b'I', b'S') => Some(Vr::Is),
            (b'L', b'O') => Some(Vr::Lo),
            (b'L', b'T') => Some(Vr::Lt),
            (b'O', b'B') => Some(Vr::Ob),
            (b'O', b'D') => Some(Vr::Od),
            (b'O', b'F') => Some(Vr::Of),
            (b'O', b'W') => Some(Vr::Ow),
            (b'P', b'N') => Some(Vr::Pn),
            (b'S', b'H') => Some(Vr::Sh),
            (b'S', b'L') => Some(Vr::Sl),
            (b'S', b'Q') => Some(Vr::Sq),
            (b'S', b'S') => Some(Vr::Ss),
            (b'S', b'T') => Some(Vr::St),
            (b'T', b'M') => Some(Vr::Tm),
            (b'U', b'I') => Some(Vr::Ui),
            (b'U', b'L') => Some(Vr::Ul),
            (b'U', b'N') => Some(Vr::Un),
            (b'U', b'S') => Some(Vr::Us),
            (b'U', b'T') => Some(Vr::Ut),
            _ => None,
        }
    }

    /// The two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Vr::Ae => "AE",
            Vr::As => "AS",
            Vr::At => "AT",
            Vr::Cs => "CS",
            Vr::Da => "DA",
            Vr::Ds => "DS",
            Vr::Dt => "DT",
            Vr::Fd => "FD",
            Vr::Fl => "FL",
            Vr::Is => "IS",
            Vr::Lo => "LO",
            Vr::Lt => "LT",
            Vr::Ob => "OB",
            Vr::Od => "OD",
            Vr::Of => "OF",
            Vr::Ow => "OW",
            Vr::Pn => "PN",
            Vr::Sh => "SH",
            Vr::Sl => "SL",
            Vr::Sq => "SQ",
            Vr::Ss => "SS",
            Vr::St => "ST",
            Vr::Tm => "TM",
            Vr::Ui => "UI",
            Vr::Ul => "UL",
            Vr::Un => "UN",
            Vr::Us => "US",
            Vr::Ut => "UT",
        }
    }

    /// Which length encoding this VR uses
    pub fn length_form(&self) -> LengthForm {
        match self {
            Vr::Ob | Vr::Of | Vr::Ow | Vr::Sq | Vr::Un | Vr::Ut => LengthForm::Long,
            _ => LengthForm::Short,
        }
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

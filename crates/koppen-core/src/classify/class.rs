use std::fmt;

use serde::{Deserialize, Serialize};

/// Output code for a point no rule of the cascade covers.
pub const UNCLASSIFIED_CODE: u8 = 0;

/// Output code for a point with a `NaN` statistic.
pub const NO_DATA_CODE: u8 = 255;

/// The 31 leaf classes, in output-code order (ET = 1 … AW = 31).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KgClass {
    ET,
    EF,
    BSh,
    BSk,
    BWs,
    BWk,
    CSa,
    CSb,
    CSc,
    CWa,
    CWb,
    CWc,
    CFa,
    CFb,
    CFc,
    DSa,
    DSb,
    DSc,
    DSd,
    DWa,
    DWb,
    DWc,
    DWd,
    DFa,
    DFb,
    DFc,
    DFd,
    AF,
    AM,
    AS,
    AW,
}

impl KgClass {
    pub const ALL: [KgClass; 31] = [
        KgClass::ET,
        KgClass::EF,
        KgClass::BSh,
        KgClass::BSk,
        KgClass::BWs,
        KgClass::BWk,
        KgClass::CSa,
        KgClass::CSb,
        KgClass::CSc,
        KgClass::CWa,
        KgClass::CWb,
        KgClass::CWc,
        KgClass::CFa,
        KgClass::CFb,
        KgClass::CFc,
        KgClass::DSa,
        KgClass::DSb,
        KgClass::DSc,
        KgClass::DSd,
        KgClass::DWa,
        KgClass::DWb,
        KgClass::DWc,
        KgClass::DWd,
        KgClass::DFa,
        KgClass::DFb,
        KgClass::DFc,
        KgClass::DFd,
        KgClass::AF,
        KgClass::AM,
        KgClass::AS,
        KgClass::AW,
    ];

    /// Output code, 1–31.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=31 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KgClass::ET => "ET",
            KgClass::EF => "EF",
            KgClass::BSh => "BSh",
            KgClass::BSk => "BSk",
            KgClass::BWs => "BWs",
            KgClass::BWk => "BWk",
            KgClass::CSa => "CSa",
            KgClass::CSb => "CSb",
            KgClass::CSc => "CSc",
            KgClass::CWa => "CWa",
            KgClass::CWb => "CWb",
            KgClass::CWc => "CWc",
            KgClass::CFa => "CFa",
            KgClass::CFb => "CFb",
            KgClass::CFc => "CFc",
            KgClass::DSa => "DSa",
            KgClass::DSb => "DSb",
            KgClass::DSc => "DSc",
            KgClass::DSd => "DSd",
            KgClass::DWa => "DWa",
            KgClass::DWb => "DWb",
            KgClass::DWc => "DWc",
            KgClass::DWd => "DWd",
            KgClass::DFa => "DFa",
            KgClass::DFb => "DFb",
            KgClass::DFc => "DFc",
            KgClass::DFd => "DFd",
            KgClass::AF => "AF",
            KgClass::AM => "AM",
            KgClass::AS => "AS",
            KgClass::AW => "AW",
        }
    }
}

impl fmt::Display for KgClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

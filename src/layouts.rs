use crate::error::PfResult;
use crate::geometry::KeyboardLayout;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    ColemakDH,
    Workman,
}

impl KnownLayout {
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            // Letters only, rows left-aligned.
            Self::Qwerty => &["qwertyuiop", "asdfghjkl", "zxcvbnm"],

            // Standard 30-key row-stagger, punctuation kept in place.
            Self::Dvorak => &["',.pyfgcrl", "aoeuidhtns", ";qjkxbmwvz"],
            Self::Colemak => &["qwfpgjluy;", "arstdhneio", "zxcvbkm,./"],
            Self::ColemakDH => &["qwfpbjluy;", "arstgmneio", "zxcdvkh,./"],
            Self::Workman => &["qdrwbjfup;", "ashtgyneoi", "zxmcvkl,./"],
        }
    }

    pub fn to_layout(&self) -> PfResult<KeyboardLayout> {
        KeyboardLayout::from_rows(self.to_string(), self.rows())
    }
}

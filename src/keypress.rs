//! Single-character serial commands

/// A keypress command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// `h`: show the command list
    Help,
    /// `b`: next brightness level, wrapping through off
    CycleBrightness,
    /// `c`: one step warmer
    Warmer,
    /// `d`: one step colder
    Colder,
    /// `q`: cold channel percentage up
    ColdUp,
    /// `a`: cold channel percentage down
    ColdDown,
    /// `w`: warm channel percentage up
    WarmUp,
    /// `s`: warm channel percentage down
    WarmDown,
}

/// Lines printed for [`KeyCommand::Help`]
pub const KEYPRESS_HELP: [&str; 6] = [
    "Keypress Commands List",
    "h   - display this help",
    "b   - cycle through brightness settings",
    "c/d - decrease/increase color temperature (warmer/colder)",
    "q/a - increase/decrease cold PWM by 5 percent",
    "w/s - increase/decrease warm PWM by 5 percent",
];

impl KeyCommand {
    /// Parse a received byte; unknown keys are ignored
    pub const fn from_byte(key: u8) -> Option<Self> {
        Some(match key {
            b'h' => Self::Help,
            b'b' => Self::CycleBrightness,
            b'c' => Self::Warmer,
            b'd' => Self::Colder,
            b'q' => Self::ColdUp,
            b'a' => Self::ColdDown,
            b'w' => Self::WarmUp,
            b's' => Self::WarmDown,
            _ => return None,
        })
    }

    pub fn from_char(key: char) -> Option<Self> {
        u8::try_from(key).ok().and_then(Self::from_byte)
    }

    pub const fn key(self) -> char {
        match self {
            Self::Help => 'h',
            Self::CycleBrightness => 'b',
            Self::Warmer => 'c',
            Self::Colder => 'd',
            Self::ColdUp => 'q',
            Self::ColdDown => 'a',
            Self::WarmUp => 'w',
            Self::WarmDown => 's',
        }
    }
}

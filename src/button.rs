//! Mode button and debounce
//!
//! A press while idle toggles between intensity and color adjustment. The
//! button then stays locked until a run of debounce ticks sees it released.

/// What the encoder currently adjusts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Intensity,
    Color,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Intensity => Self::Color,
            Self::Color => Self::Intensity,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intensity => "intensity",
            Self::Color => "color",
        }
    }
}

/// Physical button level, sampled when the countdown expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLevel {
    Released,
    Held,
}

/// Debounce state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Pressed,
    Debouncing,
}

/// Button press and debounce state machine
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    state: ButtonState,
    countdown: u8,
    ticks: u8,
}

impl Debouncer {
    /// Create an idle debouncer that waits `ticks` ticks per check
    pub const fn new(ticks: u8) -> Self {
        Self {
            state: ButtonState::Idle,
            countdown: 0,
            ticks: if ticks == 0 { 1 } else { ticks },
        }
    }

    /// Register a press edge
    ///
    /// Returns true when the press is accepted, which happens only when idle.
    pub fn press(&mut self) -> bool {
        if self.state != ButtonState::Idle {
            return false;
        }
        self.state = ButtonState::Pressed;
        true
    }

    /// Advance by one debounce tick
    pub fn tick(&mut self, level: ButtonLevel) {
        match self.state {
            ButtonState::Idle => {}
            ButtonState::Pressed => {
                self.state = ButtonState::Debouncing;
                self.countdown = self.ticks;
            }
            ButtonState::Debouncing => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    match level {
                        ButtonLevel::Released => self.state = ButtonState::Idle,
                        ButtonLevel::Held => self.countdown = self.ticks,
                    }
                }
            }
        }
    }

    pub const fn state(&self) -> ButtonState {
        self.state
    }

    pub const fn countdown(&self) -> u8 {
        self.countdown
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self.state, ButtonState::Idle)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(5)
    }
}

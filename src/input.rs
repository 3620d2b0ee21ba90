//! Input event hand-off
//!
//! The encoder/button interrupt decodes what it sees and queues an
//! [`InputEvent`]; the controller is the only consumer and the only writer of
//! lighting state.

use crate::channel::{Channel, Receiver, Sender};
use crate::encoder::{Direction, QuadratureDecoder};

/// Decoded hardware input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// One encoder microstep
    Rotate(Direction),
    /// Mode button press edge
    ButtonPressed,
}

/// Type alias for input sender
pub type InputSender<'a, const SIZE: usize> = Sender<'a, InputEvent, SIZE>;

/// Type alias for input receiver
pub type InputReceiver<'a, const SIZE: usize> = Receiver<'a, InputEvent, SIZE>;

/// Type alias for the input channel
pub type InputChannel<const SIZE: usize> = Channel<InputEvent, SIZE>;

/// Interrupt-side input handling
///
/// Owns the quadrature decoder state, so it must live with the interrupt
/// handler. Each call does a bounded amount of work and never blocks.
pub struct InputFrontend<'a, const SIZE: usize> {
    decoder: QuadratureDecoder,
    events: InputSender<'a, SIZE>,
}

impl<'a, const SIZE: usize> InputFrontend<'a, SIZE> {
    pub const fn new(events: InputSender<'a, SIZE>) -> Self {
        Self {
            decoder: QuadratureDecoder::new(),
            events,
        }
    }

    /// Start decoding from the encoder's current reading
    #[must_use]
    pub const fn with_reading(mut self, reading: u8) -> Self {
        self.decoder = QuadratureDecoder::with_reading(reading);
        self
    }

    /// Handle an edge on either encoder line
    ///
    /// `reading` is `(A << 1) | B`. Returns the decoded direction, if any,
    /// whether or not it fit into the channel.
    pub fn on_encoder_edge(&mut self, reading: u8) -> Option<Direction> {
        let direction = self.decoder.update(reading)?;
        self.events.send_lossy(InputEvent::Rotate(direction));
        Some(direction)
    }

    /// Handle a press edge on the mode button
    pub fn on_button_edge(&mut self) {
        self.events.send_lossy(InputEvent::ButtonPressed);
    }
}

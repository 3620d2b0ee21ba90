//! Fixture controller
//!
//! The controller owns the lighting state. Encoder and button events arrive
//! through the input channel, keypresses and debounce ticks come from the main
//! loop; all of them are applied here, one at a time.

#[cfg(feature = "log")]
use esp_println::println;

use crate::PwmSink;
use crate::bounds::{ColorBounds, ColorTemperature};
use crate::brightness::Intensity;
use crate::button::{ButtonLevel, ButtonState, Debouncer, Mode};
use crate::config::FixtureConfig;
use crate::display::{SharedDisplay, Suppress};
use crate::duty_table::{DutyCycleTable, TableError};
use crate::encoder::{Direction, StepAccumulator};
use crate::input::{InputEvent, InputReceiver};
use crate::keypress::KeyCommand;
use crate::output::{LedChannel, Module, Output, PERCENT_STEP};

/// Current user setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingState {
    pub color: ColorTemperature,
    pub intensity: Intensity,
}

/// Outcome of a keypress command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The caller should print the command list
    Help,
    /// Brightness or color changed
    Lighting(LightingState),
    /// A channel percentage changed
    Percent { channel: LedChannel, percent: u8 },
}

/// Single owner of all mutable fixture state
pub struct Controller<'a, P: PwmSink, const INPUT_CHANNEL_SIZE: usize> {
    // External dependencies
    inputs: InputReceiver<'a, INPUT_CHANNEL_SIZE>,
    display: &'a SharedDisplay,
    output: Output<P>,

    // Internal state
    state: LightingState,
    mode: Mode,
    intensity_steps: StepAccumulator,
    color_steps: StepAccumulator,
    button: Debouncer,
}

impl<'a, P: PwmSink, const INPUT_CHANNEL_SIZE: usize> Controller<'a, P, INPUT_CHANNEL_SIZE> {
    /// Build the duty table and drive the initial setting
    ///
    /// The primary module starts at the configured setting, the secondary
    /// module starts off.
    pub fn new(
        config: &FixtureConfig,
        pwm: P,
        display: &'a SharedDisplay,
        inputs: InputReceiver<'a, INPUT_CHANNEL_SIZE>,
    ) -> Result<Self, TableError> {
        let table = DutyCycleTable::build(&config.warm, &config.cold, config.pwm_max)?;
        let bounds = table.bounds();
        let state = LightingState {
            color: bounds.clamp(config.color),
            intensity: config.intensity,
        };

        let mut controller = Self {
            inputs,
            display,
            output: Output::new(pwm, table, config.pwm_one_percent()),
            state,
            mode: Mode::Intensity,
            intensity_steps: StepAccumulator::new(
                i16::from(state.intensity.raw()),
                i16::from(Intensity::MIN.raw()),
                i16::from(Intensity::MAX.raw()),
                config.microsteps.intensity,
            ),
            color_steps: StepAccumulator::new(
                i16::from(state.color),
                i16::from(bounds.min),
                i16::from(bounds.max),
                config.microsteps.color,
            ),
            button: Debouncer::new(config.timings.debounce_ticks),
        };

        #[cfg(feature = "log")]
        println!(
            "Setting initial (color,brightness) ({},{})",
            state.color, state.intensity
        );
        controller.apply_lighting();
        if let Err(_err) = controller
            .output
            .set_lighting(Module::Secondary, state.color, Intensity::OFF)
        {
            #[cfg(feature = "log")]
            println!("[Controller] secondary module: {}", _err);
        }
        controller.show_mode_value();

        Ok(controller)
    }

    /// Apply every queued input event
    ///
    /// Returns the number of events handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.inputs.try_receive() {
            match event {
                InputEvent::Rotate(direction) => {
                    self.on_rotation(direction);
                }
                InputEvent::ButtonPressed => {
                    self.on_button_press();
                }
            }
            handled += 1;
        }
        handled
    }

    /// Apply one encoder microstep to the active mode
    ///
    /// Returns the new state when a full step was reached.
    pub fn on_rotation(&mut self, direction: Direction) -> Option<LightingState> {
        match self.mode {
            Mode::Intensity => {
                let value = self.intensity_steps.apply(direction)?;
                self.state.intensity = i8::try_from(value)
                    .ok()
                    .and_then(|raw| Intensity::from_raw(raw).ok())?;
            }
            Mode::Color => {
                let value = self.color_steps.apply(direction)?;
                let color = ColorTemperature::try_from(value).ok()?;
                self.state.color = self.bounds().clamp(color);
            }
        }
        #[cfg(feature = "log")]
        println!("({},{})", self.state.color, self.state.intensity);
        self.show_mode_value();
        self.apply_lighting();
        Some(self.state)
    }

    /// Handle a press edge of the mode button
    ///
    /// Returns true when the mode was toggled. Presses are ignored until the
    /// previous one has been debounced.
    pub fn on_button_press(&mut self) -> bool {
        if !self.button.press() {
            return false;
        }
        self.mode = self.mode.toggled();
        match self.mode {
            Mode::Intensity => self
                .intensity_steps
                .reset_to(i16::from(self.state.intensity.raw())),
            Mode::Color => self.color_steps.reset_to(i16::from(self.state.color)),
        }
        #[cfg(feature = "log")]
        println!("[Controller] mode: {}", self.mode.as_str());
        self.show_mode_value();
        true
    }

    /// Advance the button debounce by one main loop tick
    pub fn debounce_tick(&mut self, level: ButtonLevel) {
        self.button.tick(level);
    }

    /// Apply a keypress command
    pub fn handle_key(&mut self, command: KeyCommand) -> KeyResponse {
        match command {
            KeyCommand::Help => KeyResponse::Help,
            KeyCommand::CycleBrightness => {
                self.set_intensity(self.state.intensity.cycle());
                KeyResponse::Lighting(self.state)
            }
            KeyCommand::Warmer => {
                self.set_color(self.state.color.saturating_sub(1));
                KeyResponse::Lighting(self.state)
            }
            KeyCommand::Colder => {
                self.set_color(self.state.color.saturating_add(1));
                KeyResponse::Lighting(self.state)
            }
            KeyCommand::ColdUp => self.adjust_percent(LedChannel::Cold, PERCENT_STEP),
            KeyCommand::ColdDown => self.adjust_percent(LedChannel::Cold, -PERCENT_STEP),
            KeyCommand::WarmUp => self.adjust_percent(LedChannel::Warm, PERCENT_STEP),
            KeyCommand::WarmDown => self.adjust_percent(LedChannel::Warm, -PERCENT_STEP),
        }
    }

    /// Set the brightness directly
    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.state.intensity = intensity;
        self.intensity_steps.reset_to(i16::from(intensity.raw()));
        #[cfg(feature = "log")]
        println!(
            "(color,brightness) ({},{})",
            self.state.color, self.state.intensity
        );
        if self.mode == Mode::Intensity {
            self.show_mode_value();
        }
        self.apply_lighting();
    }

    /// Set the color temperature, clamped to the supported range
    pub fn set_color(&mut self, color: ColorTemperature) {
        self.state.color = self.bounds().clamp(color);
        self.color_steps.reset_to(i16::from(self.state.color));
        #[cfg(feature = "log")]
        println!(
            "(color,brightness) ({},{})",
            self.state.color, self.state.intensity
        );
        if self.mode == Mode::Color {
            self.show_mode_value();
        }
        self.apply_lighting();
    }

    pub const fn state(&self) -> LightingState {
        self.state
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn button_state(&self) -> ButtonState {
        self.button.state()
    }

    /// Accumulator of the intensity mode
    pub const fn intensity_steps(&self) -> &StepAccumulator {
        &self.intensity_steps
    }

    /// Accumulator of the color mode
    pub const fn color_steps(&self) -> &StepAccumulator {
        &self.color_steps
    }

    pub const fn output(&self) -> &Output<P> {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut Output<P> {
        &mut self.output
    }

    pub const fn table(&self) -> &DutyCycleTable {
        self.output.table()
    }

    pub const fn bounds(&self) -> ColorBounds {
        self.output.table().bounds()
    }

    /// Value of the adjustable setting for the active mode
    pub fn mode_value(&self) -> i16 {
        match self.mode {
            Mode::Intensity => i16::from(self.state.intensity.raw()),
            Mode::Color => i16::from(self.state.color),
        }
    }

    fn adjust_percent(&mut self, channel: LedChannel, delta: i8) -> KeyResponse {
        let percent = self.output.adjust_percent(Module::Primary, channel, delta);
        KeyResponse::Percent { channel, percent }
    }

    fn show_mode_value(&self) {
        self.display.set_value(self.mode_value(), Suppress::Leading);
    }

    fn apply_lighting(&mut self) {
        // The color is kept inside the table by construction
        if let Err(_err) =
            self.output
                .set_lighting(Module::Primary, self.state.color, self.state.intensity)
        {
            #[cfg(feature = "log")]
            println!("[Controller] {}", _err);
        }
    }
}

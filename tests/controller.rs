mod tests {
    use tunable_white::{
        BRIGHTNESS_CURVE, ButtonLevel, ButtonState, Controller, Direction, DisplayBuffer,
        DutyPair, FixtureConfig, Glyph, InputChannel, InputFrontend, Intensity, KeyCommand,
        KeyResponse, LedChannel, LightingState, Mode, Module, PwmSink, SharedDisplay, Suppress,
    };

    const INPUT_CHANNEL_SIZE: usize = 16;

    #[derive(Default)]
    struct RecordingPwm {
        duty: [[u16; 2]; 2],
    }

    impl RecordingPwm {
        fn primary(&self) -> DutyPair {
            DutyPair {
                warm: self.duty[0][LedChannel::Warm.index()],
                cold: self.duty[0][LedChannel::Cold.index()],
            }
        }
    }

    impl PwmSink for RecordingPwm {
        fn set_duty(&mut self, module: Module, channel: LedChannel, duty: u16) {
            self.duty[module.index()][channel.index()] = duty;
        }
    }

    fn expected_duty(
        controller: &Controller<'_, RecordingPwm, INPUT_CHANNEL_SIZE>,
        color: u8,
        level: usize,
    ) -> DutyPair {
        let base = controller.table().get(color).unwrap();
        DutyPair {
            warm: (BRIGHTNESS_CURVE[level] * f64::from(base.warm)) as u16,
            cold: (BRIGHTNESS_CURVE[level] * f64::from(base.cold)) as u16,
        }
    }

    #[test]
    fn test_initial_state() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        assert_eq!(
            controller.state(),
            LightingState {
                color: 40,
                intensity: Intensity::level(5)
            }
        );
        assert_eq!(controller.mode(), Mode::Intensity);
        assert_eq!(
            controller.output().sink().primary(),
            expected_duty(&controller, 40, 5)
        );
        assert_eq!(controller.output().sink().duty[1], [0, 0]);
        assert_eq!(display.get().glyphs, [Glyph::Blank, Glyph::Digit(5)]);
        assert_eq!(controller.intensity_steps().raw(), 25);
        assert_eq!(controller.color_steps().raw(), 80);
    }

    #[test]
    fn test_color_step_end_to_end() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut frontend = InputFrontend::new(channel.sender());
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        frontend.on_button_edge();
        assert_eq!(controller.process_pending(), 1);
        assert_eq!(controller.mode(), Mode::Color);
        assert_eq!(display.get().glyphs, [Glyph::Digit(4), Glyph::Digit(0)]);

        // Two clockwise microsteps make one color step
        frontend.on_encoder_edge(0b10);
        controller.process_pending();
        assert_eq!(controller.state().color, 40);
        frontend.on_encoder_edge(0b11);
        controller.process_pending();

        assert_eq!(controller.state().color, 41);
        assert_eq!(controller.state().intensity, Intensity::level(5));
        assert_eq!(
            controller.output().sink().primary(),
            expected_duty(&controller, 41, 5)
        );
        assert_eq!(
            controller.output().sink().primary(),
            DutyPair {
                warm: 537,
                cold: 572
            }
        );
        assert_eq!(display.get().glyphs, [Glyph::Digit(4), Glyph::Digit(1)]);
    }

    #[test]
    fn test_intensity_steps_down_to_off() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        let mut emitted = 0;
        for _ in 0..40 {
            if controller.on_rotation(Direction::CounterClockwise).is_some() {
                emitted += 1;
            }
        }
        // 5 -> -1 takes six steps, then the limit repeats
        assert!(emitted >= 6);
        assert!(controller.state().intensity.is_off());
        assert_eq!(controller.output().sink().primary(), DutyPair::OFF);
        assert_eq!(display.get(), DisplayBuffer::from_value(-1, Suppress::Leading));
        assert_eq!(controller.intensity_steps().raw(), -5);
    }

    #[test]
    fn test_button_debounce_blocks_second_toggle() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        assert!(controller.on_button_press());
        assert!(!controller.on_button_press());
        assert_eq!(controller.mode(), Mode::Color);

        controller.debounce_tick(ButtonLevel::Released);
        assert_eq!(controller.button_state(), ButtonState::Debouncing);
        assert!(!controller.on_button_press());

        for _ in 0..5 {
            controller.debounce_tick(ButtonLevel::Released);
        }
        assert_eq!(controller.button_state(), ButtonState::Idle);
        assert!(controller.on_button_press());
        assert_eq!(controller.mode(), Mode::Intensity);
        assert_eq!(display.get().glyphs, [Glyph::Blank, Glyph::Digit(5)]);
    }

    #[test]
    fn test_toggle_resyncs_accumulator() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        // Leave the intensity counter between two values
        controller.on_rotation(Direction::Clockwise);
        controller.on_rotation(Direction::Clockwise);
        assert_eq!(controller.intensity_steps().raw(), 27);

        controller.on_button_press();
        for _ in 0..6 {
            controller.debounce_tick(ButtonLevel::Released);
        }
        controller.on_button_press();
        assert_eq!(controller.mode(), Mode::Intensity);
        assert_eq!(controller.intensity_steps().raw(), 25);
    }

    #[test]
    fn test_keypress_commands() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        assert_eq!(controller.handle_key(KeyCommand::Help), KeyResponse::Help);

        controller.set_intensity(Intensity::MAX);
        let response = controller.handle_key(KeyCommand::CycleBrightness);
        assert_eq!(
            response,
            KeyResponse::Lighting(LightingState {
                color: 40,
                intensity: Intensity::OFF
            })
        );
        assert_eq!(controller.output().sink().primary(), DutyPair::OFF);
        controller.handle_key(KeyCommand::CycleBrightness);
        assert_eq!(controller.state().intensity, Intensity::level(0));
        assert_eq!(controller.intensity_steps().raw(), 0);

        controller.handle_key(KeyCommand::Colder);
        assert_eq!(controller.state().color, 41);
        assert_eq!(controller.color_steps().raw(), 82);

        for _ in 0..60 {
            controller.handle_key(KeyCommand::Warmer);
        }
        assert_eq!(controller.state().color, 27);
        for _ in 0..60 {
            controller.handle_key(KeyCommand::Colder);
        }
        assert_eq!(controller.state().color, 71);

        assert_eq!(
            controller.handle_key(KeyCommand::ColdUp),
            KeyResponse::Percent {
                channel: LedChannel::Cold,
                percent: 5
            }
        );
        assert_eq!(
            controller.handle_key(KeyCommand::WarmDown),
            KeyResponse::Percent {
                channel: LedChannel::Warm,
                percent: 0
            }
        );
    }

    #[test]
    fn test_key_updates_display_in_active_mode() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        // Intensity mode: color keys leave the display alone
        controller.handle_key(KeyCommand::Colder);
        assert_eq!(display.get().glyphs, [Glyph::Blank, Glyph::Digit(5)]);

        controller.handle_key(KeyCommand::CycleBrightness);
        assert_eq!(display.get().glyphs, [Glyph::Blank, Glyph::Digit(6)]);
    }

    #[test]
    fn test_color_clamps_at_led_range() {
        let display = SharedDisplay::new();
        let channel: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::new();
        let mut controller = Controller::new(
            &FixtureConfig::DEFAULT,
            RecordingPwm::default(),
            &display,
            channel.receiver(),
        )
        .unwrap();

        controller.on_button_press();
        for _ in 0..200 {
            controller.on_rotation(Direction::Clockwise);
        }
        assert_eq!(controller.state().color, 71);
        assert_eq!(controller.color_steps().raw(), 142);
        assert_eq!(
            controller.output().sink().primary(),
            expected_duty(&controller, 71, 5)
        );
    }
}

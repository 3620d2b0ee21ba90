mod tests {
    use tunable_white::Direction;
    use tunable_white::encoder::{QuadratureDecoder, StepAccumulator, decode_transition};

    // One full clockwise cycle of (A, B) readings
    const CLOCKWISE: [u8; 4] = [0b10, 0b11, 0b01, 0b00];

    #[test]
    fn test_decode_transition_codes() {
        for code in [0x1, 0x7, 0xe, 0x8] {
            assert_eq!(decode_transition(code), Some(Direction::Clockwise));
        }
        for code in [0xd, 0x4, 0x2, 0xb] {
            assert_eq!(decode_transition(code), Some(Direction::CounterClockwise));
        }
        for code in [0x0, 0x5, 0xa, 0xf, 0x3, 0x6, 0x9, 0xc] {
            assert_eq!(decode_transition(code), None);
        }
    }

    #[test]
    fn test_decoder_clockwise_cycle() {
        let mut decoder = QuadratureDecoder::new();
        for reading in CLOCKWISE {
            assert_eq!(decoder.update(reading), Some(Direction::Clockwise));
        }
    }

    #[test]
    fn test_decoder_counter_clockwise_cycle() {
        let mut decoder = QuadratureDecoder::new();
        for reading in CLOCKWISE.iter().rev().skip(1).chain([&0b00]) {
            assert_eq!(decoder.update(*reading), Some(Direction::CounterClockwise));
        }
    }

    #[test]
    fn test_decoder_ignores_repeats_and_jumps() {
        let mut decoder = QuadratureDecoder::with_reading(0b01);
        assert_eq!(decoder.update(0b01), None);
        assert_eq!(decoder.update(0b10), None);
        assert_eq!(decoder.previous(), 0b10);
    }

    #[test]
    fn test_step_and_inverse_restore_accumulator() {
        let mut decoder = QuadratureDecoder::new();
        let mut steps = StepAccumulator::new(5, -1, 9, 5);
        let start = steps.raw();

        let forward = decoder.update(0b01).unwrap();
        steps.apply(forward);
        let back = decoder.update(0b00).unwrap();
        assert_eq!(back, forward.reversed());
        steps.apply(back);

        assert_eq!(steps.raw(), start);
    }

    #[test]
    fn test_microsteps_emit_once_per_divisor() {
        let mut steps = StepAccumulator::new(5, -1, 9, 5);
        let emitted: Vec<i16> = (0..5)
            .filter_map(|_| steps.apply(Direction::Clockwise))
            .collect();
        assert_eq!(emitted, vec![6]);
        assert_eq!(steps.raw(), 30);
    }

    #[test]
    fn test_emits_only_on_multiples() {
        let mut steps = StepAccumulator::new(40, 27, 71, 2);
        for _ in 0..20 {
            let emitted = steps.apply(Direction::CounterClockwise);
            assert_eq!(emitted.is_some(), steps.raw() % 2 == 0);
        }
    }

    #[test]
    fn test_accumulator_clamps() {
        let mut steps = StepAccumulator::new(9, -1, 9, 5);
        assert_eq!(steps.apply(Direction::Clockwise), Some(9));
        assert_eq!(steps.raw(), 45);

        let mut steps = StepAccumulator::new(-1, -1, 9, 5);
        assert_eq!(steps.apply(Direction::CounterClockwise), Some(-1));
        assert_eq!(steps.raw(), -5);
        assert_eq!(steps.raw_bounds(), (-5, 45));
    }

    #[test]
    fn test_reset_to_value() {
        let mut steps = StepAccumulator::new(40, 27, 71, 2);
        steps.apply(Direction::Clockwise);
        assert_eq!(steps.raw(), 81);
        steps.reset_to(50);
        assert_eq!(steps.raw(), 100);
        steps.reset_to(90);
        assert_eq!(steps.raw(), 142);
    }
}

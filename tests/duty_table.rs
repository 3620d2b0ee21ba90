mod tests {
    use tunable_white::chromaticity::{CHROMATICITY, CHROMATICITY_BOUNDS, chromaticity};
    use tunable_white::{DutyCycleTable, DutyPair, FixtureConfig, LedSpec, TableError};

    fn default_table() -> DutyCycleTable {
        let config = FixtureConfig::DEFAULT;
        DutyCycleTable::build(&config.warm, &config.cold, config.pwm_max).unwrap()
    }

    #[test]
    fn test_chromaticity_is_ordered() {
        for pair in CHROMATICITY.windows(2) {
            assert_eq!(pair[1].temperature, pair[0].temperature + 1);
            assert!(pair[1].x < pair[0].x);
        }
        for point in CHROMATICITY {
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
        }
        assert_eq!(CHROMATICITY[0].temperature, CHROMATICITY_BOUNDS.min);
        assert_eq!(
            CHROMATICITY[CHROMATICITY.len() - 1].temperature,
            CHROMATICITY_BOUNDS.max
        );
    }

    #[test]
    fn test_chromaticity_lookup() {
        let point = chromaticity(40).unwrap();
        assert_eq!(point.temperature, 40);
        assert!((point.x - 0.380_438_429).abs() < 1e-12);
        assert!(chromaticity(24).is_err());
        assert!(chromaticity(101).is_err());
    }

    #[test]
    fn test_table_covers_led_range() {
        let table = default_table();
        assert_eq!(table.bounds().min, 27);
        assert_eq!(table.bounds().max, 71);
        assert_eq!(table.iter().count(), 45);
        assert!(table.get(26).is_err());
        assert!(table.get(72).is_err());
    }

    #[test]
    fn test_table_within_pwm_range() {
        let table = default_table();
        for (_, duty) in table.iter() {
            assert!(duty.warm <= table.pwm_max());
            assert!(duty.cold <= table.pwm_max());
        }
    }

    #[test]
    fn test_table_endpoints() {
        let table = default_table();
        let max_warm = table.iter().map(|(_, duty)| duty.warm).max().unwrap();
        let max_cold = table.iter().map(|(_, duty)| duty.cold).max().unwrap();

        let warm_end = table.get(27).unwrap();
        assert_eq!(warm_end.warm, max_warm);
        assert_eq!(warm_end.cold, 0);

        let cold_end = table.get(71).unwrap();
        assert_eq!(cold_end.cold, max_cold);
        assert_eq!(cold_end.cold, 3048);
        assert_eq!(cold_end.warm, 0);
    }

    #[test]
    fn test_table_values() {
        let table = default_table();
        assert_eq!(table.get(27).unwrap(), DutyPair { warm: 2618, cold: 0 });
        assert_eq!(table.get(40).unwrap(), DutyPair { warm: 1447, cold: 1377 });
        assert_eq!(table.get(41).unwrap(), DutyPair { warm: 1374, cold: 1463 });
        assert_eq!(table.get(70).unwrap(), DutyPair { warm: 28, cold: 3048 });
    }

    #[test]
    fn test_table_is_monotonic() {
        let table = default_table();
        let duties: Vec<DutyPair> = table.iter().map(|(_, duty)| duty).collect();
        for pair in duties.windows(2) {
            assert!(pair[1].warm <= pair[0].warm);
            assert!(pair[1].cold >= pair[0].cold);
        }
    }

    #[test]
    fn test_intermediate_normalization() {
        let table = default_table();
        let intermediate_max = table
            .iter()
            .filter(|(temperature, _)| *temperature != 27 && *temperature != 71)
            .map(|(_, duty)| duty.warm.max(duty.cold))
            .max()
            .unwrap();
        assert!(intermediate_max <= 3048);
        assert!(intermediate_max >= 3047);
    }

    #[test]
    fn test_invalid_configs() {
        let warm = LedSpec {
            temperature: 27,
            max_illumination: 1.0,
        };
        let cold = LedSpec {
            temperature: 28,
            max_illumination: 0.85,
        };
        assert_eq!(
            DutyCycleTable::build(&warm, &cold, 3048).unwrap_err(),
            TableError::NoIntermediateRange { warm: 27, cold: 28 }
        );

        let cold = LedSpec {
            temperature: 120,
            max_illumination: 0.85,
        };
        assert!(matches!(
            DutyCycleTable::build(&warm, &cold, 3048),
            Err(TableError::UnknownTemperature(_))
        ));

        let cold = LedSpec {
            temperature: 65,
            max_illumination: 0.0,
        };
        assert_eq!(
            DutyCycleTable::build(&warm, &cold, 3048).unwrap_err(),
            TableError::InvalidIllumination
        );
    }
}

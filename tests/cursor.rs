mod tests {
    use lacelight::cursor::{BoundaryPolicy, Cursor, CursorConfig, StepCurve};
    use lacelight::rng::XorShift32;

    const fn config(
        accel: u8,
        period: u32,
        bound: u16,
        policy: BoundaryPolicy,
        curve: StepCurve,
    ) -> CursorConfig {
        CursorConfig {
            start: Some(0),
            accel,
            period,
            bound,
            policy,
            curve,
            accel_range: (1, 8),
            period_range: (1, 6),
        }
    }

    #[test]
    fn test_wrap_rolls_over_to_zero() {
        let mut hue = Cursor::new(config(
            1,
            1,
            256,
            BoundaryPolicy::Wrap,
            StepCurve::Linear,
        ));
        hue.set(255);
        assert!(hue.advance(0));
        assert_eq!(hue.value(), 0);
        assert!(hue.advance(1));
        assert_eq!(hue.value(), 1);
    }

    #[test]
    fn test_wrap_respects_smaller_modulus() {
        let mut cursor = Cursor::new(config(
            5,
            1,
            240,
            BoundaryPolicy::Wrap,
            StepCurve::Linear,
        ));
        cursor.set(238);
        cursor.advance(0);
        assert_eq!(cursor.value(), 3); // 243 mod 240
        for tick in 1..1000 {
            cursor.advance(tick);
            assert!(cursor.value() < 240);
        }
    }

    #[test]
    fn test_bounce_flips_without_stepping() {
        let mut cursor = Cursor::new(config(
            100,
            1,
            255,
            BoundaryPolicy::Bounce,
            StepCurve::Linear,
        ));

        cursor.advance(0);
        assert_eq!(cursor.value(), 100);
        cursor.advance(1);
        assert_eq!(cursor.value(), 200);

        // 300 would overflow: the flip itself costs the tick.
        cursor.advance(2);
        assert_eq!(cursor.value(), 200);

        // Next tick moves the other way.
        cursor.advance(3);
        assert_eq!(cursor.value(), 100);
        cursor.advance(4);
        assert_eq!(cursor.value(), 0);

        // Underflow reflects the same way.
        cursor.advance(5);
        assert_eq!(cursor.value(), 0);
        cursor.advance(6);
        assert_eq!(cursor.value(), 100);
    }

    #[test]
    fn test_period_gates_steps() {
        let mut cursor = Cursor::new(config(
            1,
            3,
            255,
            BoundaryPolicy::Bounce,
            StepCurve::Linear,
        ));

        assert!(!cursor.advance(1));
        assert!(!cursor.advance(2));
        assert!(cursor.advance(3));
        assert_eq!(cursor.value(), 1);
        assert!(!cursor.advance(4));
        assert!(cursor.advance(6));
        assert_eq!(cursor.value(), 2);
    }

    #[test]
    fn test_sine_envelope_starts_at_rest() {
        let mut cursor = Cursor::new(config(
            100,
            1,
            256,
            BoundaryPolicy::Wrap,
            StepCurve::Sine,
        ));

        // sin(0) = 0: the first step is a no-op but still counts as a step.
        assert!(cursor.advance(0));
        assert_eq!(cursor.value(), 0);

        // Early phase steps are small and grow with the envelope.
        cursor.advance(1);
        assert_eq!(cursor.value(), 2);
        cursor.advance(2);
        assert_eq!(cursor.value(), 7);
    }

    #[test]
    fn test_sine_envelope_peaks_at_quarter_phase() {
        let mut cursor = Cursor::new(config(
            100,
            1,
            256,
            BoundaryPolicy::Wrap,
            StepCurve::Sine,
        ));

        // Walk the phase to the top of the sine: the step there is +accel.
        for tick in 0..64 {
            cursor.advance(tick);
        }
        let before = i32::from(cursor.value());
        cursor.advance(64);
        let after = i32::from(cursor.value());
        assert_eq!((after - before).rem_euclid(256), 100);

        // At three-quarter phase the envelope bottoms out at -accel.
        for tick in 65..191 {
            cursor.advance(tick);
        }
        let before = i32::from(cursor.value());
        cursor.advance(191);
        let after = i32::from(cursor.value());
        assert_eq!((before - after).rem_euclid(256), 100);
    }

    #[test]
    fn test_randomize_draws_from_configured_ranges() {
        let mut cursor = Cursor::new(config(
            1,
            1,
            255,
            BoundaryPolicy::Bounce,
            StepCurve::Linear,
        ));
        let mut rng = XorShift32::new(0xdead_beef);

        for _ in 0..50 {
            cursor.randomize(&mut rng);
            assert!((1..=8).contains(&cursor.accel()));
            assert!((1..=6).contains(&cursor.period()));
        }
    }

    #[test]
    fn test_reconfigure_keeps_value_unless_pinned() {
        let mut cursor = Cursor::new(config(
            1,
            1,
            256,
            BoundaryPolicy::Wrap,
            StepCurve::Linear,
        ));
        cursor.set(42);

        let keep = CursorConfig {
            start: None,
            ..config(2, 1, 256, BoundaryPolicy::Wrap, StepCurve::Linear)
        };
        cursor.reconfigure(keep);
        assert_eq!(cursor.value(), 42);

        cursor.reconfigure(config(2, 1, 256, BoundaryPolicy::Wrap, StepCurve::Linear));
        assert_eq!(cursor.value(), 0);
    }
}

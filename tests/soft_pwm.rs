mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};
    use firefly_sync::{ChannelTargets, Line, LineDriver, PinLines, Rgb, SoftPwm};

    #[derive(Default)]
    struct Lines {
        on: [bool; 3],
    }

    impl Lines {
        fn is_on(&self, line: Line) -> bool {
            self.on[line as usize]
        }
    }

    impl LineDriver for Lines {
        fn set_line(&mut self, line: Line, on: bool) {
            self.on[line as usize] = on;
        }
    }

    /// Run one full cycle so the targets get latched, then count how many
    /// ticks of the following cycle each line was on.
    fn duty(pwm: &mut SoftPwm, targets: &ChannelTargets, lines: &mut Lines) -> [u32; 3] {
        for _ in 0..256 {
            pwm.tick(targets, lines);
        }
        let mut counts = [0; 3];
        for _ in 0..256 {
            pwm.tick(targets, lines);
            for line in Line::ALL {
                if lines.is_on(line) {
                    counts[line as usize] += 1;
                }
            }
        }
        counts
    }

    #[test]
    fn test_duty_matches_intensity() {
        let targets = ChannelTargets::new();
        let mut pwm = SoftPwm::new();
        let mut lines = Lines::default();

        for intensity in [1, 17, 128, 200, 252] {
            targets.set(Rgb::new(intensity, 0, 255 - intensity));
            let counts = duty(&mut pwm, &targets, &mut lines);
            assert_eq!(
                counts,
                [u32::from(intensity), 0, u32::from(255 - intensity)]
            );
        }
    }

    #[test]
    fn test_zero_never_asserts() {
        let targets = ChannelTargets::new();
        let mut pwm = SoftPwm::new();
        let mut lines = Lines::default();

        for _ in 0..1024 {
            pwm.tick(&targets, &mut lines);
            assert_eq!(lines.on, [false; 3]);
        }
    }

    #[test]
    fn test_full_intensity_is_off_one_tick() {
        let targets = ChannelTargets::new();
        targets.set(Rgb::new(255, 255, 255));
        let mut pwm = SoftPwm::new();
        let mut lines = Lines::default();

        assert_eq!(duty(&mut pwm, &targets, &mut lines), [255; 3]);
    }

    #[test]
    fn test_targets_latch_at_cycle_start() {
        let targets = ChannelTargets::new();
        let mut pwm = SoftPwm::new();
        let mut lines = Lines::default();

        // Counter starts at 0, the first wrap happens after 256 ticks
        for _ in 0..100 {
            pwm.tick(&targets, &mut lines);
        }
        targets.set_line(Line::Green, 50);
        for _ in 100..255 {
            pwm.tick(&targets, &mut lines);
            assert!(!lines.is_on(Line::Green));
        }
        assert_eq!(pwm.latched(Line::Green), 0);

        pwm.tick(&targets, &mut lines);
        assert_eq!(pwm.counter(), 0);
        assert_eq!(pwm.latched(Line::Green), 50);
        assert!(lines.is_on(Line::Green));
    }

    #[test]
    fn test_refresh_rate() {
        assert_eq!(SoftPwm::refresh_rate(37_500), 146);
    }

    #[derive(Default)]
    struct Pin {
        high: bool,
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_pin_lines() {
        let mut lines = PinLines::new(Pin::default(), Pin::default(), Pin::default());
        lines.set_line(Line::Red, true);
        lines.set_line(Line::Blue, true);
        lines.set_line(Line::Blue, false);

        let (red, green, blue) = lines.release();
        assert!(red.high);
        assert!(!green.high);
        assert!(!blue.high);
    }
}

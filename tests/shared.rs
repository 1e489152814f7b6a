mod tests {
    use firefly_sync::{AmbientSampler, ChannelTargets, LightLevel, Line, Rgb};

    #[test]
    fn test_sampler_overwrites_level() {
        let level = LightLevel::new();
        let sampler = AmbientSampler::new(&level);
        assert_eq!(level.current(), 0);

        sampler.on_conversion(87);
        assert_eq!(level.current(), 87);
        sampler.on_conversion(12);
        assert_eq!(sampler.level().current(), 12);
    }

    #[test]
    fn test_sampler_keeps_high_bits() {
        let level = LightLevel::new();
        let sampler = AmbientSampler::new(&level);

        sampler.on_conversion_10bit(1023);
        assert_eq!(level.current(), 255);
        sampler.on_conversion_10bit(512);
        assert_eq!(level.current(), 128);
        sampler.on_conversion_10bit(3);
        assert_eq!(level.current(), 0);
    }

    #[test]
    fn test_channel_targets() {
        let targets = ChannelTargets::new();
        assert_eq!(targets.color(), Rgb::new(0, 0, 0));

        targets.set(Rgb::new(1, 2, 3));
        assert_eq!(targets.line(Line::Red), 1);
        assert_eq!(targets.line(Line::Green), 2);
        assert_eq!(targets.line(Line::Blue), 3);

        targets.set_line(Line::Green, 200);
        assert_eq!(targets.color(), Rgb::new(1, 200, 3));

        targets.clear();
        assert_eq!(targets.color(), Rgb::new(0, 0, 0));
    }
}

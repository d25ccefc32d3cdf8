mod tests {
    use embassy_time::{Duration, Instant};
    use ring_lamp::color::Rgbw;
    use ring_lamp::config::{ConfigError, RingConfig};
    use ring_lamp::engine::ModeEngine;
    use ring_lamp::gamma::gamma_correct;
    use ring_lamp::mode::{ModeId, ModeSlot};
    use ring_lamp::random::Xorshift32;

    const RING: usize = 24;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Engine that has finished setting up `Off`
    fn running_engine(config: &RingConfig, random: &mut Xorshift32) -> ModeEngine<RING> {
        let mut engine = ModeEngine::<RING>::new(config).unwrap();
        engine.tick(at(0), ModeId::Off, random);
        engine.tick(at(20), ModeId::Off, random);
        assert_eq!(engine.active_mode(), Some(ModeId::Off));
        engine
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = RingConfig::RELEASE;
        assert_eq!(
            ModeEngine::<23>::new(&config).err(),
            Some(ConfigError::OddRing(23))
        );
        assert_eq!(
            ModeEngine::<0>::new(&config).err(),
            Some(ConfigError::EmptyRing)
        );

        let bright = RingConfig {
            luminance: 1.5,
            ..RingConfig::RELEASE
        };
        assert_eq!(
            ModeEngine::<RING>::new(&bright).err(),
            Some(ConfigError::LuminanceOutOfRange)
        );
        assert!(ModeEngine::<RING>::new(&RingConfig::DEBUG).is_ok());
    }

    #[test]
    fn test_first_tick_pauses_then_sets_up_off() {
        let mut engine = ModeEngine::<RING>::new(&RingConfig::RELEASE).unwrap();
        let mut random = Xorshift32::new(7);
        assert_eq!(engine.active_mode(), None);

        let step = engine.tick(at(0), ModeId::Off, &mut random);
        assert!(!step.frame_changed);
        assert_eq!(step.idle, Duration::from_millis(20));
        assert!(engine.is_switching());

        let step = engine.tick(at(15), ModeId::Off, &mut random);
        assert!(!step.frame_changed);
        assert_eq!(step.idle, Duration::from_millis(5));
        assert_eq!(engine.pause_remaining(at(15)), Duration::from_millis(5));

        let step = engine.tick(at(20), ModeId::Off, &mut random);
        assert!(step.frame_changed);
        assert_eq!(step.idle, Duration::from_millis(20));
        assert!(!engine.is_switching());
        assert_eq!(engine.active_mode(), Some(ModeId::Off));
        assert!(engine.output().iter().all(|pixel| pixel.is_black()));
    }

    #[test]
    fn test_off_stays_idle() {
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&RingConfig::RELEASE, &mut random);

        let step = engine.tick(at(40), ModeId::Off, &mut random);
        assert!(!step.frame_changed);
        assert_eq!(step.idle, RingConfig::RELEASE.idle_delay);
    }

    #[test]
    fn test_switch_to_rotator() {
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&RingConfig::RELEASE, &mut random);

        let step = engine.tick(at(100), ModeId::Rotator, &mut random);
        assert!(!step.frame_changed);
        assert_eq!(step.idle, Duration::from_millis(20));
        assert!(engine.is_switching());
        assert_eq!(engine.active_mode(), Some(ModeId::Off));

        let step = engine.tick(at(120), ModeId::Rotator, &mut random);
        assert!(step.frame_changed);
        assert_eq!(engine.active_mode(), Some(ModeId::Rotator));
        assert_eq!(engine.active_slot().id(), ModeId::Rotator);
        assert!(engine.frame().iter().all(|pixel| pixel.is_black()));

        engine.tick(at(320), ModeId::Rotator, &mut random);
        let ModeSlot::Rotator(mode) = engine.active_slot() else {
            panic!("rotator not active");
        };
        assert_eq!(mode.dots(), (1, 13));
        for (pixel, state) in engine.frame().iter().zip(mode.pixels()) {
            assert_eq!(*pixel, state.end_color);
        }
        assert!(!engine.frame()[1].is_black());
    }

    #[test]
    fn test_target_change_during_pause() {
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&RingConfig::RELEASE, &mut random);

        engine.tick(at(100), ModeId::Fader, &mut random);
        let step = engine.tick(at(110), ModeId::Rotator, &mut random);
        assert_eq!(step.idle, Duration::from_millis(10));

        engine.tick(at(120), ModeId::Rotator, &mut random);
        assert_eq!(engine.active_mode(), Some(ModeId::Rotator));
    }

    #[test]
    fn test_switch_stops_old_mode() {
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&RingConfig::RELEASE, &mut random);

        engine.tick(at(100), ModeId::Fader, &mut random);
        engine.tick(at(120), ModeId::Fader, &mut random);
        engine.tick(at(5_000), ModeId::Fader, &mut random);
        let faded = *engine.frame();
        assert!(!faded[0].is_black());

        // The frame holds still while the switch pauses
        engine.tick(at(5_010), ModeId::Rotator, &mut random);
        engine.tick(at(5_020), ModeId::Rotator, &mut random);
        assert!(engine.is_switching());
        assert_eq!(*engine.frame(), faded);
    }

    #[test]
    fn test_light_with_gamma() {
        let config = RingConfig {
            gamma: true,
            ..RingConfig::RELEASE
        };
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&config, &mut random);

        engine.tick(at(100), ModeId::Light, &mut random);
        engine.tick(at(120), ModeId::Light, &mut random);

        let white = Rgbw::white(220);
        assert!(engine.frame().iter().all(|&pixel| pixel == white));
        assert!(engine.output().iter().all(|&pixel| pixel == gamma_correct(white)));

        // Idle ticks never correct twice
        engine.tick(at(140), ModeId::Light, &mut random);
        assert!(engine.output().iter().all(|&pixel| pixel == gamma_correct(white)));
    }

    #[test]
    fn test_light_without_gamma() {
        let mut random = Xorshift32::new(7);
        let mut engine = running_engine(&RingConfig::RELEASE, &mut random);

        engine.tick(at(100), ModeId::Light, &mut random);
        engine.tick(at(120), ModeId::Light, &mut random);

        assert_eq!(engine.output(), engine.frame());
        assert_eq!(engine.output()[0], Rgbw::new(0, 0, 0, 220));
    }
}

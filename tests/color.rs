mod tests {
    use ring_lamp::color::{Rgbw, hsl_to_rgbw, linear_blend};
    use ring_lamp::gamma::{gamma8, gamma_correct};
    use smart_leds::RGBW;

    const RED: Rgbw = Rgbw::new(255, 0, 0, 0);
    const BLUE: Rgbw = Rgbw::new(0, 0, 255, 0);
    const BLACK: Rgbw = Rgbw::BLACK;
    const FULL: Rgbw = Rgbw::new(255, 255, 255, 255);

    #[test]
    fn test_linear_blend_endpoints() {
        assert_eq!(linear_blend(RED, BLUE, 0.0), RED);
        assert_eq!(linear_blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(linear_blend(BLACK, FULL, 0.0), BLACK);
        assert_eq!(linear_blend(BLACK, FULL, 1.0), FULL);
    }

    #[test]
    fn test_linear_blend_midpoint() {
        assert_eq!(
            linear_blend(BLACK, FULL, 0.5),
            Rgbw::new(127, 127, 127, 127)
        );
        assert_eq!(linear_blend(RED, BLUE, 0.5), Rgbw::new(127, 0, 127, 0));
    }

    #[test]
    fn test_linear_blend_clamps_progress() {
        assert_eq!(linear_blend(RED, BLUE, -0.5), RED);
        assert_eq!(linear_blend(RED, BLUE, 1.5), BLUE);
    }

    #[test]
    fn test_linear_blend_is_monotonic() {
        let a = Rgbw::new(10, 200, 0, 255);
        let b = Rgbw::new(240, 30, 0, 0);
        let mut previous = a;
        for step in 1..=100 {
            let color = linear_blend(a, b, step as f32 / 100.0);
            assert!(color.r >= previous.r);
            assert!(color.g <= previous.g);
            assert_eq!(color.b, 0);
            assert!(color.w <= previous.w);
            previous = color;
        }
        assert_eq!(previous, b);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgbw(0.0, 1.0, 0.5), Rgbw::new(255, 0, 0, 0));
        assert_eq!(hsl_to_rgbw(1.0 / 3.0, 1.0, 0.5), Rgbw::new(0, 255, 0, 0));
        assert_eq!(hsl_to_rgbw(2.0 / 3.0, 1.0, 0.5), Rgbw::new(0, 0, 255, 0));
    }

    #[test]
    fn test_hsl_lightness_extremes() {
        assert_eq!(hsl_to_rgbw(0.4, 1.0, 0.0), BLACK);
        assert_eq!(hsl_to_rgbw(0.4, 1.0, 1.0), Rgbw::new(255, 255, 255, 0));
        assert_eq!(hsl_to_rgbw(0.4, 0.0, 0.5), Rgbw::new(127, 127, 127, 0));
    }

    #[test]
    fn test_hsl_never_uses_white() {
        for step in 0..360 {
            let color = hsl_to_rgbw(step as f32 / 360.0, 1.0, 0.5);
            assert_eq!(color.w, 0);
            // Fully saturated: one channel is always off
            assert!(color.r == 0 || color.g == 0 || color.b == 0);
        }
    }

    #[test]
    fn test_hsl_low_luminance() {
        // Channels are truncated, never rounded up
        assert_eq!(hsl_to_rgbw(0.0, 1.0, 0.05), Rgbw::new(25, 0, 0, 0));
        assert_eq!(hsl_to_rgbw(1.0 / 3.0, 1.0, 0.05), Rgbw::new(0, 25, 0, 0));
    }

    #[test]
    fn test_gamma_correct() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(255), 255);
        assert_eq!(
            gamma_correct(Rgbw::new(0, 128, 255, 64)),
            Rgbw::new(0, 55, 255, 12)
        );
    }

    #[test]
    fn test_gamma_is_monotonic() {
        for value in 1..=255u8 {
            assert!(gamma8(value) >= gamma8(value - 1));
        }
    }

    #[test]
    fn test_rgbw_conversion() {
        let color: RGBW<u8> = Rgbw::new(1, 2, 3, 4).into();
        assert_eq!((color.r, color.g, color.b, color.a.0), (1, 2, 3, 4));
        assert!(Rgbw::BLACK.is_black());
        assert!(!Rgbw::white(1).is_black());
    }
}

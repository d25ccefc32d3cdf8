mod tests {
    use embassy_time::Duration;
    use ring_lamp::math8::{lerp8, progress};

    #[test]
    fn test_lerp8() {
        assert_eq!(lerp8(0, 255, 0.0), 0);
        assert_eq!(lerp8(0, 255, 1.0), 255);
        assert_eq!(lerp8(0, 255, 0.5), 127);
        assert_eq!(lerp8(255, 0, 0.5), 127);
        assert_eq!(lerp8(100, 100, 0.3), 100);
    }

    #[test]
    fn test_lerp8_clamps() {
        assert_eq!(lerp8(10, 20, 2.0), 20);
        assert_eq!(lerp8(10, 20, -1.0), 10);
        assert_eq!(lerp8(10, 20, f32::NAN), 10);
    }

    #[test]
    fn test_progress() {
        assert_eq!(
            progress(Duration::from_millis(0), Duration::from_millis(100)),
            0.0
        );
        assert_eq!(
            progress(Duration::from_millis(50), Duration::from_millis(100)),
            0.5
        );
        assert_eq!(
            progress(Duration::from_millis(100), Duration::from_millis(100)),
            1.0
        );
        assert_eq!(
            progress(Duration::from_millis(150), Duration::from_millis(100)),
            1.0
        );
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(
            progress(Duration::from_millis(0), Duration::from_millis(0)),
            1.0
        );
    }
}

mod tests {
    use strip_arcade::color::{Rgb, colors, rgb_from_u32, saturating_add, scaled};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_saturating_add_clamps_per_channel() {
        let a = Rgb { r: 200, g: 10, b: 0 };
        let b = Rgb { r: 100, g: 20, b: 5 };
        assert_eq!(saturating_add(a, b), Rgb { r: 255, g: 30, b: 5 });
        assert_eq!(saturating_add(WHITE, WHITE), WHITE);
    }

    #[test]
    fn test_saturating_add_black_is_identity() {
        let color = Rgb {
            r: 12,
            g: 34,
            b: 56,
        };
        assert_eq!(saturating_add(color, BLACK), color);
        assert_eq!(saturating_add(BLACK, color), color);
    }

    #[test]
    fn test_scaled_endpoints() {
        let color = Rgb {
            r: 128,
            g: 64,
            b: 255,
        };
        assert_eq!(scaled(color, 255), color);
        assert_eq!(scaled(color, 0), BLACK);
    }

    #[test]
    fn test_scaled_half() {
        let color = Rgb {
            r: 255,
            g: 128,
            b: 0,
        };
        assert_eq!(
            scaled(color, 128),
            Rgb {
                r: 128,
                g: 64,
                b: 0
            }
        );
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(
            rgb_from_u32(0xFF8000),
            Rgb {
                r: 255,
                g: 128,
                b: 0
            }
        );
        assert_eq!(rgb_from_u32(0x000000), BLACK);
        assert_eq!(rgb_from_u32(0xFFFFFF), WHITE);
        assert_eq!(rgb_from_u32(0x000040), Rgb { r: 0, g: 0, b: 64 });
    }

    #[test]
    fn test_named_colors_match_hex() {
        assert_eq!(colors::RED, rgb_from_u32(0xFF0000));
        assert_eq!(colors::BLUE, rgb_from_u32(0x0000FF));
        assert_eq!(colors::GREEN, rgb_from_u32(0x008000));
    }
}

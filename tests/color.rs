mod tests {
    use lacelight::color::{Hsv, Rgb, hsv2rgb};

    #[test]
    fn test_hue_zero_is_pure_red() {
        assert_eq!(
            hsv2rgb(Hsv {
                hue: 0,
                sat: 255,
                val: 255
            }),
            Rgb { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_zero_saturation_is_exact_gray() {
        for hue in 0..=255u8 {
            for val in [0u8, 1, 64, 127, 255] {
                assert_eq!(
                    hsv2rgb(Hsv { hue, sat: 0, val }),
                    Rgb {
                        r: val,
                        g: val,
                        b: val
                    }
                );
            }
        }
    }

    #[test]
    fn test_value_scales_brightness() {
        assert_eq!(
            hsv2rgb(Hsv {
                hue: 0,
                sat: 255,
                val: 128
            }),
            Rgb { r: 128, g: 0, b: 0 }
        );
        assert_eq!(
            hsv2rgb(Hsv {
                hue: 0,
                sat: 255,
                val: 0
            }),
            Rgb { r: 0, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_full_saturation_spans_val_to_zero() {
        // In the cone model one channel always sits at `val` and, at full
        // saturation, another at zero - for every hue on the wheel.
        for hue in 0..=255u8 {
            let color = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 200,
            });
            let max = color.r.max(color.g).max(color.b);
            let min = color.r.min(color.g).min(color.b);
            assert_eq!(max, 200, "hue {hue}");
            assert_eq!(min, 0, "hue {hue}");
        }
    }

    #[test]
    fn test_sector_order_walks_the_wheel() {
        // Red-dominant start, green-dominant a third around, blue-dominant
        // two thirds around.
        let third = hsv2rgb(Hsv {
            hue: 86,
            sat: 255,
            val: 255,
        });
        assert_eq!(third.g, 255);
        let two_thirds = hsv2rgb(Hsv {
            hue: 171,
            sat: 255,
            val: 255,
        });
        assert_eq!(two_thirds.b, 255);
    }

    #[test]
    fn test_partial_saturation_lifts_the_floor() {
        let color = hsv2rgb(Hsv {
            hue: 0,
            sat: 128,
            val: 255,
        });
        // p = v * (255 - s) / 255
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 127);
        assert_eq!(color.b, 127);
    }
}

//! Domain-critical regression tests for colorkit.
//!
//! These tests cut across modules: codec round trips, interpolation
//! endpoints, and the special cases of achromatic hues. Each test documents
//! the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::input::Format;
    use crate::interpolate::{mix, Mode};
    use crate::io::HexMode;
    use crate::metrics::{contrast, delta_e, DeltaEWeights};
    use crate::scale::Scale;
    use crate::space::{Illuminant, Space};
    use crate::Color;

    fn color(s: &str) -> Color {
        Color::new(s).unwrap()
    }

    fn sample_colors() -> Vec<Color> {
        [
            "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#808080", "#ff69b4",
            "#123456", "#fedcba", "#00ced1", "#7f3f1f",
        ]
        .iter()
        .map(|s| color(s))
        .collect()
    }

    // ========================================================================
    // Codec round trips
    // ========================================================================

    /// If this breaks, it means: a forward or inverse conversion in one of the
    /// color spaces drifted, so converting a color into that space and back
    /// no longer lands on the same sRGB value. Lab-family spaces get a small
    /// tolerance, the rest must be exact after rounding.
    #[test]
    fn test_every_space_round_trips() {
        for c in sample_colors() {
            let [r, g, b, _] = c.rgb_raw();
            for space in Space::ALL {
                let channels = c.channels(space);
                let back = Color::from_space(space, &channels, Illuminant::D65).unwrap();
                let [r2, g2, b2, _] = back.rgb_raw();
                let err = (r - r2).abs().max((g - g2).abs()).max((b - b2).abs());
                assert!(
                    err < 0.5,
                    "REGRESSION: {} through {space} came back as {} (max channel error {err})",
                    c.hex(HexMode::Auto),
                    back.hex(HexMode::Auto)
                );
            }
        }
    }

    /// If this breaks, it means: hex parsing and formatting disagree, e.g.
    /// the alpha byte is dropped or short hex is expanded wrongly.
    #[test]
    fn test_hex_round_trip_with_alpha() {
        for hex in ["#ff000080", "#12345600", "#abcdef"] {
            assert_eq!(color(hex).hex(HexMode::Auto), hex);
        }
        assert_eq!(color("#f00a").hex(HexMode::Rgba), "#ff0000aa");
    }

    /// If this breaks, it means: out-of-range input is no longer clamped
    /// once, or clamping a clamped color reports it as clipped again.
    #[test]
    fn test_clamping_is_idempotent() {
        let wild = Color::with_format(vec![300.0, -20.0, 128.0], Format::Rgb).unwrap();
        assert!(wild.clipped());
        assert_eq!(wild.rgb(), [255.0, 0.0, 128.0]);

        let again = Color::from_rgba(wild.rgba());
        assert!(!again.clipped());
        assert_eq!(again, wild);
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    /// If this breaks, it means: some interpolation strategy does not return
    /// its endpoints at f = 0 and f = 1, so scales would start or end on
    /// the wrong color.
    #[test]
    fn test_mix_endpoints_for_every_mode() {
        let a = color("#ff69b4");
        let b = color("#123456");
        for mode in Mode::ALL {
            assert_eq!(mix(&a, &b, 0.0, mode).hex(HexMode::Auto), "#ff69b4", "{mode} at 0");
            assert_eq!(mix(&a, &b, 1.0, mode).hex(HexMode::Auto), "#123456", "{mode} at 1");
        }
    }

    /// If this breaks, it means: hue interpolation goes the long way round.
    /// 350 and 10 degrees are 20 degrees apart through 0, so the midpoint
    /// must be red, not cyan.
    #[test]
    fn test_hue_takes_shorter_arc() {
        let a = Color::with_format(vec![350.0, 1.0, 0.5], Format::Hsl).unwrap();
        let b = Color::with_format(vec![10.0, 1.0, 0.5], Format::Hsl).unwrap();
        let mid = mix(&a, &b, 0.5, Mode::Hsl);
        assert_eq!(mid.hsl()[0], 0.0);
        assert_eq!(mid.hex(HexMode::Auto), "#ff0000");
    }

    /// If this breaks, it means: the special case for black and white in
    /// hue interpolation changed. Black and white have no hue and zero
    /// saturation; mixing them towards a saturated color must borrow both
    /// hue and saturation (except in HSV), while a mid gray only borrows
    /// the hue.
    #[test]
    fn test_achromatic_endpoints_borrow_saturation() {
        let red = color("red");
        assert_eq!(mix(&color("black"), &red, 0.5, Mode::Hsl).hex(HexMode::Auto), "#800000");
        assert_eq!(mix(&color("black"), &red, 0.5, Mode::Hsv).hex(HexMode::Auto), "#804040");
        assert_eq!(mix(&color("#808080"), &red, 0.5, Mode::Hsl).hex(HexMode::Auto), "#bf4040");
        assert_eq!(mix(&color("white"), &color("blue"), 0.5, Mode::Lch).hex(HexMode::Auto), "#b38bff");
    }

    /// If this breaks, it means: alpha is no longer interpolated alongside
    /// the color channels.
    #[test]
    fn test_mix_interpolates_alpha() {
        let a = color("red").with_alpha(0.0);
        let b = color("blue");
        assert_eq!(mix(&a, &b, 0.25, Mode::Rgb).alpha(), 0.25);
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// If this breaks, it means: the WCAG ratio is no longer ordered
    /// lighter-over-darker, or the luminance formula changed.
    #[test]
    fn test_contrast_is_symmetric() {
        let pairs = [("yellow", "navy"), ("white", "black"), ("#777", "#777")];
        for (a, b) in pairs {
            assert_eq!(contrast(&color(a), &color(b)), contrast(&color(b), &color(a)));
        }
        assert_eq!(contrast(&color("white"), &color("black")), 21.0);
        assert_eq!(contrast(&color("#777"), &color("#777")), 1.0);
        assert!((contrast(&color("yellow"), &color("navy")) - 14.908867729685754).abs() < 1e-9);
    }

    /// If this breaks, it means: CIEDE2000 lost its hue rotation term or
    /// its weighting, which shows up first on near-neutral colors.
    #[test]
    fn test_delta_e_near_neutral() {
        let d = delta_e(&color("#ededee"), &color("#edeeed"), DeltaEWeights::default());
        assert!((d - 1.3211084544691352).abs() < 1e-6, "got {d}");
        assert_eq!(delta_e(&color("red"), &color("red"), DeltaEWeights::default()), 0.0);
    }

    // ========================================================================
    // Scales
    // ========================================================================

    /// If this breaks, it means: a two-stop scale no longer returns its stops
    /// at the domain ends, for any mode.
    #[test]
    fn test_scale_boundaries() {
        for mode in Mode::ALL {
            let s = Scale::new(vec![color("#ff69b4"), color("#123456")])
                .domain(&[10.0, 20.0])
                .mode(mode);
            assert_eq!(s.get(10.0).hex(HexMode::Auto), "#ff69b4", "{mode}");
            assert_eq!(s.get(20.0).hex(HexMode::Auto), "#123456", "{mode}");
        }
    }

    /// If this breaks, it means: an in-place channel edit that fails half way
    /// leaves the color modified.
    #[test]
    fn test_failed_edit_leaves_color_untouched() {
        let mut c = color("#ff69b4");
        assert!(c.set_channel_in_place("lab.x", 10.0).is_err());
        assert!(c.set_channel_in_place("nope.l", 10.0).is_err());
        assert_eq!(c.hex(HexMode::Auto), "#ff69b4");
    }
}

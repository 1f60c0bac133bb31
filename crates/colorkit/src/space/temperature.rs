//! Correlated color temperature.
//!
//! Kelvin to sRGB uses Neil Bartlett's fit of Mitchell Charity's blackbody
//! table. The inverse bisects the blue/red ratio, which grows monotonically
//! with temperature.

const MIN_KELVIN: f64 = 1000.0;
const MAX_KELVIN: f64 = 40000.0;
const EPSILON: f64 = 0.4;

/// Kelvin to sRGB (0-255, unclamped).
pub fn to_rgb(kelvin: f64) -> [f64; 3] {
    let t = kelvin / 100.0;
    if t < 66.0 {
        let g = if t < 6.0 {
            0.0
        } else {
            let x = t - 2.0;
            -155.25485562709179 - 0.44596950469579133 * x + 104.49216199393888 * x.ln()
        };
        let b = if t < 20.0 {
            0.0
        } else {
            let x = t - 10.0;
            -254.76935184120902 + 0.8274096064007395 * x + 115.67994401066147 * x.ln()
        };
        [255.0, g, b]
    } else {
        let x = t - 55.0;
        let r = 351.97690566805693 + 0.114206453784165 * x - 40.25366309332127 * x.ln();
        let x = t - 50.0;
        let g = 325.4494125711974 + 0.07943456536662342 * x - 28.0852963507957 * x.ln();
        [r, g, 255.0]
    }
}

/// Estimate the temperature in Kelvin, searching `[1000, 40000]`.
pub fn from_rgb(rgb: [f64; 3]) -> f64 {
    let target = rgb[2] / rgb[0];
    let (mut lo, mut hi) = (MIN_KELVIN, MAX_KELVIN);
    let mut temp = (lo + hi) * 0.5;
    while hi - lo > EPSILON {
        temp = (lo + hi) * 0.5;
        let probe = to_rgb(temp);
        if probe[2] / probe[0] >= target {
            hi = temp;
        } else {
            lo = temp;
        }
    }
    temp.round()
}

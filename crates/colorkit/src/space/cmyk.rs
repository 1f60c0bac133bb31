//! Naive CMYK, every channel in `[0, 1]`.

pub fn from_rgb(rgb: [f64; 3]) -> [f64; 4] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let k = 1.0 - r.max(g).max(b);
    let f = if k < 1.0 { 1.0 / (1.0 - k) } else { 0.0 };
    [(1.0 - r - k) * f, (1.0 - g - k) * f, (1.0 - b - k) * f, k]
}

pub fn to_rgb(cmyk: [f64; 4]) -> [f64; 3] {
    let [c, m, y, k] = cmyk;
    if k == 1.0 {
        return [0.0, 0.0, 0.0];
    }
    [c, m, y].map(|v| if v >= 1.0 { 0.0 } else { 255.0 * (1.0 - v) * (1.0 - k) })
}

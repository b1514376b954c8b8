use std::fmt;

/// Hue/saturation/lightness color with alpha, as understood by CSS.
///
/// `saturation` and `lightness` are percentages in `[0, 100]`. `alpha` is
/// passed through unclamped; canvas implementations clamp it to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    /// Equivalent of the CSS `transparent` keyword.
    pub const TRANSPARENT: Hsla = Hsla::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

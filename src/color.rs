use crate::Error;

/// A device-independent RGB color. Each component lies in `0.0..=1.0`; values
/// are scaled down to the active device's native color depth just before the
/// wire bytes are assembled (0..=63 on the MK2, 0..=127 on the MK3, and four
/// red/green intensity levels on the MK1).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RgbColor = RgbColor::new(1.0, 1.0, 1.0);
    pub const RED: RgbColor = RgbColor::new(1.0, 0.0, 0.0);
    pub const GREEN: RgbColor = RgbColor::new(0.0, 1.0, 0.0);
    pub const BLUE: RgbColor = RgbColor::new(0.0, 0.0, 1.0);
    pub const ORANGE: RgbColor = RgbColor::new(1.0, 0.27, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every component lies in `0.0..=1.0`.
    pub fn is_valid(&self) -> bool {
        let ok = |c: f32| (0.0..=1.0).contains(&c);
        ok(self.r) && ok(self.g) && ok(self.b)
    }

    pub(crate) fn validate(self) -> Result<Self, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidRgbColor { color: self })
        }
    }

    /// Scale the components from `0.0..=1.0` to `0..range`.
    ///
    /// `quantize(64)` yields the MK2's 6 bit components, `quantize(128)` the
    /// MK3's 7 bit ones. Full intensity maps to `range - 1`.
    pub(crate) fn quantize(self, range: u16) -> (u8, u8, u8) {
        let quantize_component =
            |c: f32| u16::min((c.clamp(0.0, 1.0) * range as f32) as u16, range - 1) as u8;
        (
            quantize_component(self.r),
            quantize_component(self.g),
            quantize_component(self.b),
        )
    }

    /// Quantize one component to the MK1's four intensity levels, with
    /// thresholds at 1/3 and 2/3 of full intensity.
    pub(crate) fn quantize_rg(c: f32) -> u8 {
        u8::min((c.clamp(0.0, 1.0) * 3.0) as u8, 3)
    }
}

impl From<(f32, f32, f32)> for RgbColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for RgbColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

/// A color argument as accepted by [`Launchpad::set_button_color`](crate::Launchpad::set_button_color):
/// either an index into the device-resident palette, or a device-independent
/// RGB color.
///
/// The legal palette range depends on the generation (0..=63 on the MK1,
/// where the index is the raw velocity byte; 0..=127 elsewhere). Values
/// outside the active device's range fail validation before any bytes are
/// sent.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Palette(u8),
    Rgb(RgbColor),
}

impl From<u8> for Color {
    fn from(id: u8) -> Self {
        Self::Palette(id)
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self {
        Self::Rgb(color)
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from(rgb: (f32, f32, f32)) -> Self {
        Self::Rgb(rgb.into())
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::Rgb(rgb.into())
    }
}

/// Check that a palette color index lies within the device's palette.
pub(crate) fn validate_palette_color(color: u8, max: u8) -> Result<u8, Error> {
    if color > max {
        return Err(Error::InvalidPaletteColor { color, max });
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_covers_full_component_range() {
        assert_eq!(RgbColor::RED.quantize(64), (63, 0, 0));
        assert_eq!(RgbColor::RED.quantize(128), (127, 0, 0));
        assert_eq!(RgbColor::new(0.5, 1.0, 0.0).quantize(64), (32, 63, 0));
        assert_eq!(RgbColor::BLACK.quantize(128), (0, 0, 0));
    }

    #[test]
    fn quantize_rg_thresholds() {
        assert_eq!(RgbColor::quantize_rg(0.0), 0);
        assert_eq!(RgbColor::quantize_rg(0.3), 0);
        assert_eq!(RgbColor::quantize_rg(0.34), 1);
        assert_eq!(RgbColor::quantize_rg(0.67), 2);
        assert_eq!(RgbColor::quantize_rg(1.0), 3);
    }

    #[test]
    fn out_of_range_components_fail_validation() {
        assert!(RgbColor::new(1.2, 0.0, 0.0).validate().is_err());
        assert!(RgbColor::new(0.0, -0.1, 0.0).validate().is_err());
        assert!(RgbColor::WHITE.validate().is_ok());
    }

    #[test]
    fn palette_range_is_enforced() {
        assert!(validate_palette_color(127, 127).is_ok());
        assert!(validate_palette_color(128, 127).is_err());
        assert!(validate_palette_color(64, 63).is_err());
    }
}

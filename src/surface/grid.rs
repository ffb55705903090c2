use crate::Style;

/// A rectangular field of button styles.
///
/// Coordinates are signed: reads outside the bounds yield [`Style::Off`] and
/// writes outside the bounds are ignored. That tolerance is what lets the
/// [`Drawing`](crate::Drawing) helpers draw and scroll partially visible
/// shapes without clipping logic at every call site.
pub trait Grid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Write one cell. Out-of-bounds writes are ignored.
    fn set(&mut self, x: i32, y: i32, style: Style);

    /// Read one cell. Out-of-bounds reads yield [`Style::Off`].
    fn get(&self, x: i32, y: i32) -> Style;

    /// Set every cell to [`Style::Off`].
    fn all_off(&mut self);
}

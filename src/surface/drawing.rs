use std::collections::HashMap;

use super::Grid;
use crate::Style;

/// Helper routines for drawing on a [`Grid`].
///
/// All helpers inherit the grid's bounds tolerance: shapes hanging over the
/// edge are silently clipped.
pub struct Drawing<'a, G: Grid> {
    grid: &'a mut G,
}

impl<'a, G: Grid> Drawing<'a, G> {
    pub fn new(grid: &'a mut G) -> Self {
        Self { grid }
    }

    /// Draw a bitmap at the given coordinates.
    ///
    /// The bitmap is a list of text rows; `style_map` maps each character to
    /// a style. Characters without a mapping leave their cell untouched,
    /// which is how bitmaps get transparent pixels.
    pub fn bitmap(&mut self, (x, y): (i32, i32), lines: &[&str], style_map: &HashMap<char, Style>) {
        for (j, line) in lines.iter().enumerate() {
            for (i, c) in line.chars().enumerate() {
                if let Some(&style) = style_map.get(&c) {
                    self.grid.set(x + i as i32, y + j as i32, style);
                }
            }
        }
    }

    /// Fill a rectangle with the given style.
    pub fn rect(&mut self, (x, y): (i32, i32), (width, height): (u32, u32), style: Style) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.grid.set(x + dx, y + dy, style);
            }
        }
    }

    /// Move the whole grid content by the given amount. Cells shifted in
    /// from beyond the edge are [`Style::Off`], so repeated shifts scroll
    /// content out of view.
    pub fn shift(&mut self, (dx, dy): (i32, i32)) {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;

        // Read the full source frame before writing anything, so the shift
        // doesn't consume its own output.
        let mut shifted = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                shifted.push((x, y, self.grid.get(x - dx, y - dy)));
            }
        }

        for (x, y, style) in shifted {
            self.grid.set(x, y, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;

    fn palette(color: u8) -> Style {
        Style::Palette { color }
    }

    #[test]
    fn bitmap_with_transparent_pixels() {
        let mut layer = Layer::new(5, 5);
        let style_map = HashMap::from([('x', palette(5))]);

        Drawing::new(&mut layer).bitmap((1, 1), &["x.x", ".x."], &style_map);

        assert_eq!(layer.get(1, 1), palette(5));
        assert_eq!(layer.get(2, 1), Style::Off);
        assert_eq!(layer.get(3, 1), palette(5));
        assert_eq!(layer.get(2, 2), palette(5));
        assert_eq!(layer.get(0, 0), Style::Off);
    }

    #[test]
    fn rect_fills_and_clips() {
        let mut layer = Layer::new(4, 4);
        Drawing::new(&mut layer).rect((2, 2), (3, 3), palette(9));

        assert_eq!(layer.get(2, 2), palette(9));
        assert_eq!(layer.get(3, 3), palette(9));
        assert_eq!(layer.get(1, 1), Style::Off);
    }

    #[test]
    fn zero_size_rect_paints_nothing() {
        let mut layer = Layer::new(3, 3);
        Drawing::new(&mut layer).rect((1, 1), (0, 0), palette(9));

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(layer.get(x, y), Style::Off);
            }
        }
    }

    #[test]
    fn zero_shift_is_identity() {
        let mut layer = Layer::new(3, 3);
        layer.set(1, 2, palette(4));

        Drawing::new(&mut layer).shift((0, 0));

        assert_eq!(layer.get(1, 2), palette(4));
        assert_eq!(layer.get(0, 0), Style::Off);
    }

    #[test]
    fn shift_moves_content_and_clears_the_vacated_edge() {
        let mut layer = Layer::new(3, 3);
        layer.set(0, 0, palette(1));
        layer.set(1, 1, palette(2));

        Drawing::new(&mut layer).shift((1, 0));

        assert_eq!(layer.get(1, 0), palette(1));
        assert_eq!(layer.get(2, 1), palette(2));
        assert_eq!(layer.get(0, 0), Style::Off);
        assert_eq!(layer.get(1, 1), Style::Off);
    }

    #[test]
    fn shift_off_the_edge_discards_content() {
        let mut layer = Layer::new(2, 2);
        layer.set(1, 1, palette(1));

        Drawing::new(&mut layer).shift((1, 1));

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(layer.get(x, y), Style::Off);
            }
        }
    }
}

use super::Grid;
use crate::{util::Array2d, Style};

/// One stackable framebuffer of button styles, row-major, all cells
/// initially [`Style::Off`].
#[derive(Debug, Clone)]
pub struct Layer {
    cells: Array2d<Style>,
}

impl Layer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2d::new(width, height),
        }
    }
}

impl Default for Layer {
    /// A layer sized for the full 9x9 surface (8x8 grid plus control row and
    /// side column).
    fn default() -> Self {
        Self::new(9, 9)
    }
}

impl Grid for Layer {
    fn width(&self) -> u32 {
        self.cells.width()
    }

    fn height(&self) -> u32 {
        self.cells.height()
    }

    fn set(&mut self, x: i32, y: i32, style: Style) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self.cells.get_mut(x as u32, y as u32) {
            *cell = style;
        }
    }

    fn get(&self, x: i32, y: i32) -> Style {
        if x < 0 || y < 0 {
            return Style::Off;
        }
        self.cells.get(x as u32, y as u32).copied().unwrap_or(Style::Off)
    }

    fn all_off(&mut self) {
        self.cells.fill(Style::Off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_start_off_and_remember_writes() {
        let mut layer = Layer::new(3, 2);
        assert_eq!(layer.get(0, 0), Style::Off);

        layer.set(2, 1, Style::Palette { color: 5 });
        assert_eq!(layer.get(2, 1), Style::Palette { color: 5 });

        layer.all_off();
        assert_eq!(layer.get(2, 1), Style::Off);
    }

    #[test]
    fn out_of_bounds_access_is_tolerated() {
        let mut layer = Layer::new(3, 2);
        layer.set(-1, 0, Style::Palette { color: 5 });
        layer.set(3, 0, Style::Palette { color: 5 });
        layer.set(0, 2, Style::Palette { color: 5 });

        assert_eq!(layer.get(-1, 0), Style::Off);
        assert_eq!(layer.get(3, 0), Style::Off);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(layer.get(x, y), Style::Off);
            }
        }
    }
}

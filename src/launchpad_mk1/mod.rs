//! Driver for the first Launchpad generation (the original Launchpad and the
//! Launchpad S).
//!
//! The MK1 predates the Novation SysEx protocol: per-button writes are plain
//! channel messages, and color is a single velocity byte packing a red and a
//! green intensity (two bits each) plus flash/static flag bits. There is no
//! blue channel; the blue component of an RGB color is simply dropped.
//!
//! Buttons are addressed as `(y - 1) * 16 + x` on the grid and `x + 104` on
//! the control row. The two ranges overlap: number 104 is both the leftmost
//! control button and the grid pad at `(8, 7)`. Coordinate addressing is
//! unambiguous, so prefer it over raw numbers near that corner.

mod input;
pub use input::*;

mod output;
pub use output::*;

use crate::{Button, ButtonIn, Color, Error, RgbColor, Style};

/// Status byte for grid pads (note on).
pub(crate) const STATUS_GRID: u8 = 144;
/// Status byte for the control row (controller change).
pub(crate) const STATUS_CONTROL: u8 = 176;

/// Clears all state, including the flash timer.
pub(crate) const RESET: [u8; 3] = [176, 0, 0];
/// Restarts the hardware flash timer. Must be re-sent after flashing buttons
/// are written, or they stay solid.
pub(crate) const REARM_FLASH_TIMER: [u8; 3] = [176, 0, 40];

/// Resolve a button argument to its protocol number.
pub fn map_button(button: impl Into<ButtonIn>) -> u8 {
    match button.into() {
        ButtonIn::Number(nr) => nr,
        ButtonIn::Button(button) => button.nr,
        ButtonIn::Coord { x, y } => {
            if y == 0 {
                (x as u16 + 104) as u8
            } else {
                ((y as u16 - 1) * 16 + x as u16) as u8
            }
        }
    }
}

/// Attribute an incoming message to a grid coordinate.
///
/// Grid notes invert the `(y - 1) * 16 + x` mapping; control-row messages
/// land on row 0. Anything else keeps the number but gets the sentinel
/// coordinate, so a noisy device can't break the event pipeline.
pub fn parse_button(status: u8, note: u8) -> Button {
    let xy = match status {
        STATUS_CONTROL if note >= 104 => ((note - 104) as i8, 0),
        STATUS_GRID => ((note % 16) as i8, (note / 16 + 1) as i8),
        _ => Button::INVALID_XY,
    };
    Button::new(note, xy)
}

/// Pack a color into the MK1's velocity byte: `16 * green + red`, plus the
/// flash flag (8) or the static double-buffering flags (12).
///
/// Palette colors are the raw velocity byte and pass through untouched, which
/// also means the caller is responsible for its own flag bits.
pub(crate) fn velocity(color: Color, flash: bool) -> Result<u8, Error> {
    match color {
        Color::Palette(velocity) => crate::validate_palette_color(velocity, 63),
        Color::Rgb(rgb) => {
            let rgb = rgb.validate()?;
            let red = RgbColor::quantize_rg(rgb.r);
            let green = RgbColor::quantize_rg(rgb.g);
            Ok(16 * green + red + if flash { 8 } else { 12 })
        }
    }
}

/// Whether a write must go out as a controller change. Grid wins the number
/// 104 ambiguity, so only coordinates and the unambiguous numbers 105..=111
/// route to the control row.
fn is_control_row(button: ButtonIn) -> bool {
    match button {
        ButtonIn::Coord { y, .. } => y == 0,
        ButtonIn::Number(nr) => (105..=111).contains(&nr),
        ButtonIn::Button(button) => (105..=111).contains(&button.nr),
    }
}

/// The channel message lighting one button. Validates before assembling.
pub(crate) fn encode_button_color(
    button: ButtonIn,
    color: Color,
    flash: bool,
) -> Result<[u8; 3], Error> {
    let velocity = velocity(color, flash)?;
    let status = if is_control_row(button) {
        STATUS_CONTROL
    } else {
        STATUS_GRID
    };
    Ok([status, map_button(button), velocity])
}

fn batch_entry(entry: &crate::ButtonStyle) -> Result<[u8; 3], Error> {
    let (color, flash) = match entry.style {
        Style::Off => (Color::Rgb(RgbColor::BLACK), false),
        Style::Palette { color } => (Color::Palette(color), false),
        Style::Rgb { rgb } => (Color::Rgb(rgb), false),
        // No second flash color and no pulse on this hardware.
        Style::Flash { color, .. } => (Color::Palette(color), true),
        Style::Pulse { color } => (Color::Palette(color), true),
    };
    encode_button_color(entry.button, color, flash)
}

/// The message sequence for a batched update: one channel message per entry,
/// then a single flash timer rearm. An invalid entry fails the whole batch
/// before anything would be sent.
pub(crate) fn encode_set_buttons(buttons: &[crate::ButtonStyle]) -> Result<Vec<[u8; 3]>, Error> {
    if buttons.is_empty() {
        return Ok(Vec::new());
    }

    let mut messages = Vec::with_capacity(buttons.len() + 1);
    for entry in buttons {
        messages.push(batch_entry(entry)?);
    }
    messages.push(REARM_FLASH_TIMER);
    Ok(messages)
}

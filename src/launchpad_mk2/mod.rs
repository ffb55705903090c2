//! Driver for the second Launchpad generation (Launchpad MK2).
//!
//! All LED writes are SysEx messages under model byte 24; button events
//! arrive as plain channel messages. The grid is addressed in the session
//! layout, `91 - 10 * y + x`, with the control row at `x + 104`.

mod input;
pub use input::*;

mod output;
pub use output::*;

use crate::{sysex::make_sysex, Button, ButtonIn, Color, Error, Style};

pub(crate) const MODEL_BYTE: u8 = 24;

pub(crate) const STATUS_GRID: u8 = 144;
pub(crate) const STATUS_CONTROL: u8 = 176;

fn sysex(payload: &[u8]) -> Vec<u8> {
    make_sysex(MODEL_BYTE, payload)
}

/// Resolve a button argument to its session layout note number.
pub fn map_button(button: impl Into<ButtonIn>) -> u8 {
    match button.into() {
        ButtonIn::Number(nr) => nr,
        ButtonIn::Button(button) => button.nr,
        ButtonIn::Coord { x, y } => {
            if y == 0 {
                (x as u16 + 104) as u8
            } else {
                (91 - 10 * y as i16 + x as i16) as u8
            }
        }
    }
}

/// Attribute an incoming message to a grid coordinate. Unknown status bytes
/// keep the number but get the sentinel coordinate.
pub fn parse_button(status: u8, note: u8) -> Button {
    let xy = match status {
        STATUS_CONTROL if note >= 104 => ((note - 104) as i8, 0),
        STATUS_GRID => (
            ((note as i16 - 1) % 10) as i8,
            ((99 - note as i16).div_euclid(10)) as i8,
        ),
        _ => Button::INVALID_XY,
    };
    Button::new(note, xy)
}

/// The SysEx message lighting one button. Palette colors use the single-LED
/// command, RGB colors the 6 bit RGB command.
pub(crate) fn encode_button_color(button: ButtonIn, color: Color) -> Result<Vec<u8>, Error> {
    let nr = map_button(button);
    match color {
        Color::Palette(color) => {
            crate::validate_palette_color(color, 127)?;
            Ok(sysex(&[10, nr, color]))
        }
        Color::Rgb(rgb) => {
            let (r, g, b) = rgb.validate()?.quantize(64);
            Ok(sysex(&[11, nr, r, g, b]))
        }
    }
}

pub(crate) fn encode_flash(button: ButtonIn, color: u8) -> Result<Vec<u8>, Error> {
    crate::validate_palette_color(color, 127)?;
    Ok(sysex(&[35, 0, map_button(button), color]))
}

pub(crate) fn encode_pulse(button: ButtonIn, color: u8) -> Result<Vec<u8>, Error> {
    crate::validate_palette_color(color, 127)?;
    Ok(sysex(&[40, 0, map_button(button), color]))
}

pub(crate) fn encode_all_off() -> Vec<u8> {
    sysex(&[14, 0])
}

/// Switch the device to the session layout. Sent once on connect; the other
/// layouts remap the grid and are not supported here.
pub(crate) fn encode_session_layout() -> Vec<u8> {
    sysex(&[34, 0])
}

fn batch_entry(entry: &crate::ButtonStyle, messages: &mut Vec<Vec<u8>>) -> Result<(), Error> {
    match entry.style {
        Style::Off => messages.push(encode_button_color(entry.button, Color::Palette(0))?),
        Style::Palette { color } => {
            messages.push(encode_button_color(entry.button, Color::Palette(color))?)
        }
        Style::Rgb { rgb } => messages.push(encode_button_color(entry.button, Color::Rgb(rgb))?),
        Style::Flash { color, color_b } => {
            // The hardware flashes against whatever is currently shown, so a
            // second color is a plain write followed by the flash command.
            if let Some(color_b) = color_b {
                messages.push(encode_button_color(entry.button, Color::Palette(color_b))?);
            }
            messages.push(encode_flash(entry.button, color)?);
        }
        Style::Pulse { color } => messages.push(encode_pulse(entry.button, color)?),
    }
    Ok(())
}

/// The message sequence for a batched update. This generation has no
/// multi-LED command, so each entry becomes its own SysEx message; an invalid
/// entry fails the whole batch before anything would be sent.
pub(crate) fn encode_set_buttons(buttons: &[crate::ButtonStyle]) -> Result<Vec<Vec<u8>>, Error> {
    let mut messages = Vec::with_capacity(buttons.len());
    for entry in buttons {
        batch_entry(entry, &mut messages)?;
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonStyle, RgbColor};

    #[test]
    fn grid_mapping() {
        assert_eq!(map_button((0, 1)), 81);
        assert_eq!(map_button((8, 1)), 89);
        assert_eq!(map_button((0, 8)), 11);
        assert_eq!(map_button((8, 8)), 19);
        assert_eq!(map_button((4, 0)), 108);
    }

    #[test]
    fn parse_inverts_mapping() {
        for y in 1..=8u8 {
            for x in 0..=8u8 {
                let nr = map_button((x, y));
                assert_eq!(parse_button(STATUS_GRID, nr).xy, (x as i8, y as i8));
            }
        }
        assert_eq!(parse_button(STATUS_CONTROL, 104).xy, (0, 0));
        assert_eq!(parse_button(250, 11).xy, Button::INVALID_XY);
    }

    #[test]
    fn palette_write() {
        let message = encode_button_color((0, 1).into(), Color::Palette(17));
        assert_eq!(message.ok(), Some(vec![240, 0, 32, 41, 2, 24, 10, 81, 17, 247]));
    }

    #[test]
    fn rgb_write_quantizes_to_six_bits() {
        let message = encode_button_color((0, 1).into(), Color::Rgb(RgbColor::RED));
        assert_eq!(
            message.ok(),
            Some(vec![240, 0, 32, 41, 2, 24, 11, 81, 63, 0, 0, 247])
        );

        let message = encode_button_color(55.into(), Color::Rgb(RgbColor::RED));
        assert_eq!(
            message.ok(),
            Some(vec![240, 0, 32, 41, 2, 24, 11, 55, 63, 0, 0, 247])
        );
    }

    #[test]
    fn flash_and_pulse_commands() {
        assert_eq!(
            encode_flash((0, 1).into(), 5).ok(),
            Some(vec![240, 0, 32, 41, 2, 24, 35, 0, 81, 5, 247])
        );
        assert_eq!(
            encode_pulse((0, 1).into(), 5).ok(),
            Some(vec![240, 0, 32, 41, 2, 24, 40, 0, 81, 5, 247])
        );
    }

    #[test]
    fn batch_is_one_message_per_entry() {
        let messages = encode_set_buttons(&[
            ButtonStyle::new((0, 1), Style::Palette { color: 5 }),
            ButtonStyle::new((1, 1), Style::Off),
        ])
        .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], vec![240, 0, 32, 41, 2, 24, 10, 82, 0, 247]);
    }

    #[test]
    fn invalid_entry_fails_the_whole_batch() {
        let result = encode_set_buttons(&[
            ButtonStyle::new((0, 1), Style::Palette { color: 5 }),
            ButtonStyle::new((1, 1), Style::Rgb { rgb: RgbColor::new(2.0, 0.0, 0.0) }),
        ]);
        assert!(result.is_err());
    }
}

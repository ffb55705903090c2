//! Driver for the third Launchpad generation (Launchpad X / Mini MK3).
//!
//! All LED writes go through the single multi-LED SysEx command under model
//! byte 13, so a batched update of any size is exactly one message. The whole
//! surface, control row included, is addressed uniformly as
//! `(9 - y) * 10 + x + 1`.
//!
//! These devices expose both a DAW and a MIDI interface; only the MIDI
//! interface reports button presses, hence the port keyword.

mod input;
pub use input::*;

mod output;
pub use output::*;

use crate::{sysex::make_sysex, Button, ButtonIn, Color, Error, Style};

pub(crate) const MODEL_BYTE: u8 = 13;

pub(crate) const STATUS_GRID: u8 = 144;
pub(crate) const STATUS_CONTROL: u8 = 176;

fn sysex(payload: &[u8]) -> Vec<u8> {
    make_sysex(MODEL_BYTE, payload)
}

/// Resolve a button argument to its programmer layout note number.
pub fn map_button(button: impl Into<ButtonIn>) -> u8 {
    match button.into() {
        ButtonIn::Number(nr) => nr,
        ButtonIn::Button(button) => button.nr,
        ButtonIn::Coord { x, y } => ((9 - y as i16) * 10 + x as i16 + 1) as u8,
    }
}

/// Attribute an incoming message to a grid coordinate. Both note on and
/// controller change carry pad events here; anything else keeps the number
/// but gets the sentinel coordinate.
pub fn parse_button(status: u8, note: u8) -> Button {
    let xy = match status {
        STATUS_GRID | STATUS_CONTROL => {
            let col = ((note as i16 - 1) % 10) as i8;
            let row = (note / 10) as i8;
            (col, 9 - row)
        }
        _ => Button::INVALID_XY,
    };
    Button::new(note, xy)
}

/// Append one lighting group to a multi-LED command payload. Groups are
/// tagged by lighting type: 0 static palette, 1 flash, 2 pulse, 3 RGB.
fn led_group(nr: u8, style: Style, payload: &mut Vec<u8>) -> Result<(), Error> {
    match style {
        Style::Off => payload.extend([0, nr, 0]),
        Style::Palette { color } => {
            crate::validate_palette_color(color, 127)?;
            payload.extend([0, nr, color]);
        }
        Style::Flash { color, color_b } => {
            let color_b = color_b.unwrap_or(0);
            crate::validate_palette_color(color, 127)?;
            crate::validate_palette_color(color_b, 127)?;
            payload.extend([1, nr, color_b, color]);
        }
        Style::Pulse { color } => {
            crate::validate_palette_color(color, 127)?;
            payload.extend([2, nr, color]);
        }
        Style::Rgb { rgb } => {
            let (r, g, b) = rgb.validate()?.quantize(128);
            payload.extend([3, nr, r, g, b]);
        }
    }
    Ok(())
}

/// The single SysEx message for a batched update: the multi-LED command with
/// one lighting group per entry, in input order. An invalid entry fails the whole
/// batch before anything would be sent.
pub(crate) fn encode_set_buttons(buttons: &[crate::ButtonStyle]) -> Result<Vec<u8>, Error> {
    let mut payload = vec![3];
    for entry in buttons {
        led_group(map_button(entry.button), entry.style, &mut payload)?;
    }
    Ok(sysex(&payload))
}

pub(crate) fn encode_button_color(button: ButtonIn, color: Color) -> Result<Vec<u8>, Error> {
    let style = match color {
        Color::Palette(color) => Style::Palette { color },
        Color::Rgb(rgb) => Style::Rgb { rgb },
    };
    encode_set_buttons(&[crate::ButtonStyle::new(button, style)])
}

pub(crate) fn encode_all_off() -> Vec<u8> {
    sysex(&[14, 0])
}

/// Enter or leave programmer mode. Programmer mode gives full control of all
/// buttons; leaving it hands the surface back to the device's own modes and
/// clears the lights.
pub(crate) fn encode_programmer_mode(enable: bool) -> Vec<u8> {
    sysex(&[14, enable as u8])
}

/// Global LED brightness, `0..=127`.
pub(crate) fn encode_brightness(brightness: u8) -> Result<Vec<u8>, Error> {
    crate::validate_palette_color(brightness, 127)?;
    Ok(sysex(&[8, brightness]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonStyle, RgbColor};

    #[test]
    fn uniform_mapping_covers_grid_and_control_row() {
        assert_eq!(map_button((0, 0)), 91);
        assert_eq!(map_button((8, 0)), 99);
        assert_eq!(map_button((0, 1)), 81);
        assert_eq!(map_button((8, 8)), 19);
    }

    #[test]
    fn parse_inverts_mapping() {
        for y in 0..=8u8 {
            for x in 0..=8u8 {
                let nr = map_button((x, y));
                assert_eq!(parse_button(STATUS_GRID, nr).xy, (x as i8, y as i8));
            }
        }
        assert_eq!(parse_button(STATUS_CONTROL, 91).xy, (0, 0));
        assert_eq!(parse_button(3, 91).xy, Button::INVALID_XY);
    }

    #[test]
    fn batch_is_a_single_message() {
        let message = encode_set_buttons(&[
            ButtonStyle::new((0, 1), Style::Palette { color: 5 }),
            ButtonStyle::new((1, 1), Style::Flash { color: 6, color_b: Some(7) }),
            ButtonStyle::new((2, 1), Style::Pulse { color: 8 }),
            ButtonStyle::new((3, 1), Style::Rgb { rgb: RgbColor::BLUE }),
            ButtonStyle::new((4, 1), Style::Off),
        ])
        .unwrap();
        #[rustfmt::skip]
        assert_eq!(
            message,
            vec![
                240, 0, 32, 41, 2, 13, 3,
                0, 81, 5,
                1, 82, 7, 6,
                2, 83, 8,
                3, 84, 0, 0, 127,
                0, 85, 0,
                247,
            ]
        );
    }

    #[test]
    fn single_write_goes_through_the_multi_led_command() {
        let message = encode_button_color((0, 1).into(), Color::Palette(5));
        assert_eq!(message.ok(), Some(vec![240, 0, 32, 41, 2, 13, 3, 0, 81, 5, 247]));
    }

    #[test]
    fn rgb_write_addresses_by_coordinate() {
        let message = encode_button_color((3, 3).into(), Color::Rgb(RgbColor::RED));
        assert_eq!(
            message.ok(),
            Some(vec![240, 0, 32, 41, 2, 13, 3, 3, 64, 127, 0, 0, 247])
        );
    }

    #[test]
    fn rgb_quantizes_to_seven_bits() {
        let message = encode_button_color((0, 1).into(), Color::Rgb(RgbColor::WHITE));
        assert_eq!(
            message.ok(),
            Some(vec![240, 0, 32, 41, 2, 13, 3, 3, 81, 127, 127, 127, 247])
        );
    }

    #[test]
    fn invalid_entry_fails_the_whole_batch() {
        let result = encode_set_buttons(&[
            ButtonStyle::new((0, 1), Style::Palette { color: 5 }),
            ButtonStyle::new((1, 1), Style::Palette { color: 200 }),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn mode_and_brightness_commands() {
        assert_eq!(encode_programmer_mode(true), vec![240, 0, 32, 41, 2, 13, 14, 1, 247]);
        assert_eq!(encode_all_off(), vec![240, 0, 32, 41, 2, 13, 14, 0, 247]);
        assert_eq!(
            encode_brightness(127).ok(),
            Some(vec![240, 0, 32, 41, 2, 13, 8, 127, 247])
        );
        assert!(encode_brightness(128).is_err());
    }
}

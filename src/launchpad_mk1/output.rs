use super::{encode_button_color, encode_set_buttons, RESET};
use crate::{ButtonIn, ButtonStyle, Color, Error, Launchpad, OutputDevice};

/// The output half of a first-generation Launchpad connection.
///
/// This generation needs no mode-switch handshake; the connection is usable
/// as soon as the port is open.
pub struct Output {
    connection: midir::MidiOutputConnection,
}

impl OutputDevice for Output {
    const MIDI_CONNECTION_NAME: &'static str = "Padlight MK1 output";
    const MIDI_DEVICE_KEYWORD: &'static str = "Launchpad";

    fn from_connection(connection: midir::MidiOutputConnection) -> Result<Self, Error> {
        Ok(Self { connection })
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        log::debug!("Sending {bytes:?}");
        self.connection.send(bytes)?;
        Ok(())
    }
}

impl Output {
    /// Turn all lights off and close the connection. Dropping the value has
    /// the same effect; this form merely makes the intent explicit.
    pub fn close(self) {}
}

impl Launchpad for Output {
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error> {
        let message = encode_button_color(button, color, false)?;
        self.send(&message)
    }

    fn flash(&mut self, button: ButtonIn, color: u8, _color_b: Option<u8>) -> Result<(), Error> {
        let message = encode_button_color(button, Color::Palette(color), true)?;
        self.send(&message)?;
        self.send(&super::REARM_FLASH_TIMER)
    }

    // No native pulse on this hardware; flashing is the closest rendering.
    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        self.flash(button, color, None)
    }

    fn all_off(&mut self) -> Result<(), Error> {
        self.send(&RESET)
    }

    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error> {
        for message in encode_set_buttons(buttons)? {
            self.send(&message)?;
        }
        Ok(())
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        // Best effort; the port may already be gone.
        let _ = self.send(&RESET);
    }
}

use super::{
    encode_all_off, encode_brightness, encode_button_color, encode_programmer_mode,
    encode_set_buttons,
};
use crate::{ButtonIn, ButtonStyle, Color, Error, Launchpad, OutputDevice, Style};

/// The output half of a Launchpad X / Mini MK3 connection. Connecting
/// switches the device into programmer mode; dropping the value switches it
/// back, which also clears the lights.
pub struct Output {
    connection: midir::MidiOutputConnection,
}

impl OutputDevice for Output {
    const MIDI_CONNECTION_NAME: &'static str = "Padlight MK3 output";
    const MIDI_DEVICE_KEYWORD: &'static str = "MK3 MIDI";

    fn from_connection(connection: midir::MidiOutputConnection) -> Result<Self, Error> {
        let mut self_ = Self { connection };
        self_.send(&encode_programmer_mode(true))?;
        self_.set_brightness(127)?;
        Ok(self_)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        log::debug!("Sending {bytes:?}");
        self.connection.send(bytes)?;
        Ok(())
    }
}

impl Output {
    /// Set the global LED brightness, `0..=127`.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), Error> {
        let message = encode_brightness(brightness)?;
        self.send(&message)
    }

    /// Turn all lights off and close the connection. Dropping the value has
    /// the same effect; this form merely makes the intent explicit.
    pub fn close(self) {}
}

impl Launchpad for Output {
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error> {
        let message = encode_button_color(button, color)?;
        self.send(&message)
    }

    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error> {
        let message = encode_set_buttons(&[ButtonStyle::new(button, Style::Flash { color, color_b })])?;
        self.send(&message)
    }

    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        let message = encode_set_buttons(&[ButtonStyle::new(button, Style::Pulse { color })])?;
        self.send(&message)
    }

    fn all_off(&mut self) -> Result<(), Error> {
        self.send(&encode_all_off())
    }

    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error> {
        if buttons.is_empty() {
            return Ok(());
        }
        let message = encode_set_buttons(buttons)?;
        self.send(&message)
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        // Leaving programmer mode also clears the lights. Best effort; the
        // port may already be gone.
        let _ = self.send(&encode_programmer_mode(false));
    }
}

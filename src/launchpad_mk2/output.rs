use super::{
    encode_all_off, encode_button_color, encode_flash, encode_pulse, encode_session_layout,
    encode_set_buttons,
};
use crate::{ButtonIn, ButtonStyle, Color, Error, Launchpad, OutputDevice};

/// The output half of a Launchpad MK2 connection. Connecting switches the
/// device into the session layout.
pub struct Output {
    connection: midir::MidiOutputConnection,
}

impl OutputDevice for Output {
    const MIDI_CONNECTION_NAME: &'static str = "Padlight MK2 output";
    const MIDI_DEVICE_KEYWORD: &'static str = "Launchpad MK2";

    fn from_connection(connection: midir::MidiOutputConnection) -> Result<Self, Error> {
        let mut self_ = Self { connection };
        self_.send(&encode_session_layout())?;
        Ok(self_)
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
        let message = encode_button_color(button, color)?;
        self.send(&message)
    }

    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error> {
        // The hardware flashes against whatever is currently shown, so the
        // second color is a plain write right before the flash command. Both
        // messages are assembled up front so a bad argument sends neither.
        let color_b_message = color_b
            .map(|color_b| encode_button_color(button, Color::Palette(color_b)))
            .transpose()?;
        let message = encode_flash(button, color)?;

        if let Some(color_b_message) = color_b_message {
            self.send(&color_b_message)?;
        }
        self.send(&message)
    }

    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        let message = encode_pulse(button, color)?;
        self.send(&message)
    }

    fn all_off(&mut self) -> Result<(), Error> {
        self.send(&encode_all_off())
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
        let _ = self.send(&encode_all_off());
    }
}

//! A fake device for tests and dry runs.

use crate::{ButtonIn, ButtonStyle, Color, Error, Launchpad};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    SetButtonColor { button: ButtonIn, color: Color },
    Flash { button: ButtonIn, color: u8, color_b: Option<u8> },
    Pulse { button: ButtonIn, color: u8 },
    AllOff,
    SetButtons(Vec<ButtonStyle>),
}

/// A [`Launchpad`] that records every call instead of talking to hardware.
///
/// Useful for testing rendering logic, and as a stand-in when no device is
/// connected.
#[derive(Debug, Default)]
pub struct MockLaunchpad {
    pub calls: Vec<MockCall>,
}

impl MockLaunchpad {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Launchpad for MockLaunchpad {
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error> {
        self.calls.push(MockCall::SetButtonColor { button, color });
        Ok(())
    }

    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error> {
        self.calls.push(MockCall::Flash { button, color, color_b });
        Ok(())
    }

    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        self.calls.push(MockCall::Pulse { button, color });
        Ok(())
    }

    fn all_off(&mut self) -> Result<(), Error> {
        self.calls.push(MockCall::AllOff);
        Ok(())
    }

    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error> {
        self.calls.push(MockCall::SetButtons(buttons.to_vec()));
        Ok(())
    }
}

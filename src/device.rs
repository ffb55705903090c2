use crate::{
    launchpad_mk1, launchpad_mk2, launchpad_mk3, midi_io::port_names, Button, ButtonIn,
    ButtonStyle, Color, Error, EventPoller, InputDevice as _, OutputDevice as _,
};

/// Something that happened on the device side.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Emitted exactly once per input connection, before any button event.
    Ready { device_name: String },
    /// The untouched bytes of an incoming message. Every message is emitted
    /// in this form, immediately before its decoded counterpart (if any), so
    /// applications can react to traffic the decoder doesn't understand.
    Raw { data: Vec<u8> },
    Press { button: Button },
    Release { button: Button },
}

/// The output capabilities every Launchpad generation provides.
///
/// All methods validate their arguments in full before any bytes reach the
/// transport; an `Err` return means the device state is unchanged.
pub trait Launchpad {
    /// Light a single button. Accepts a protocol button number, an `(x, y)`
    /// coordinate pair, or a [`Button`] - see [`ButtonIn`].
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error>;

    /// Flash a button between `color` and `color_b` (or black, when absent)
    /// on a 50% duty cycle. Not all generations can render the second color;
    /// those fall back to flashing against black.
    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error>;

    /// Pulse a button's brightness up and down. Generations without a native
    /// pulse fall back to flashing.
    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error>;

    /// Turn every light off.
    fn all_off(&mut self) -> Result<(), Error>;

    /// Apply several button styles in one batch, using the fewest messages
    /// the generation's protocol allows. All entries are validated before
    /// anything is sent.
    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error>;
}

impl<L: Launchpad + ?Sized> Launchpad for &mut L {
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error> {
        (**self).set_button_color(button, color)
    }

    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error> {
        (**self).flash(button, color, color_b)
    }

    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        (**self).pulse(button, color)
    }

    fn all_off(&mut self) -> Result<(), Error> {
        (**self).all_off()
    }

    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error> {
        (**self).set_buttons(buttons)
    }
}

/// A connected Launchpad of whichever generation [`auto_detect`] found.
pub enum AnyLaunchpad {
    Mk1(launchpad_mk1::Output),
    Mk2(launchpad_mk2::Output),
    Mk3(launchpad_mk3::Output),
}

impl AnyLaunchpad {
    /// The generation's marketing name, for logging and display.
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::Mk1(_) => "Launchpad MK1",
            Self::Mk2(_) => "Launchpad MK2",
            Self::Mk3(_) => "Launchpad MK3",
        }
    }

    /// Turn all lights off and close the connection. Dropping the value has
    /// the same effect; this form merely makes the intent explicit.
    pub fn close(self) {}
}

impl std::fmt::Debug for AnyLaunchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_name())
    }
}

impl Launchpad for AnyLaunchpad {
    fn set_button_color(&mut self, button: ButtonIn, color: Color) -> Result<(), Error> {
        match self {
            Self::Mk1(d) => d.set_button_color(button, color),
            Self::Mk2(d) => d.set_button_color(button, color),
            Self::Mk3(d) => d.set_button_color(button, color),
        }
    }

    fn flash(&mut self, button: ButtonIn, color: u8, color_b: Option<u8>) -> Result<(), Error> {
        match self {
            Self::Mk1(d) => d.flash(button, color, color_b),
            Self::Mk2(d) => d.flash(button, color, color_b),
            Self::Mk3(d) => d.flash(button, color, color_b),
        }
    }

    fn pulse(&mut self, button: ButtonIn, color: u8) -> Result<(), Error> {
        match self {
            Self::Mk1(d) => d.pulse(button, color),
            Self::Mk2(d) => d.pulse(button, color),
            Self::Mk3(d) => d.pulse(button, color),
        }
    }

    fn all_off(&mut self) -> Result<(), Error> {
        match self {
            Self::Mk1(d) => d.all_off(),
            Self::Mk2(d) => d.all_off(),
            Self::Mk3(d) => d.all_off(),
        }
    }

    fn set_buttons(&mut self, buttons: &[ButtonStyle]) -> Result<(), Error> {
        match self {
            Self::Mk1(d) => d.set_buttons(buttons),
            Self::Mk2(d) => d.set_buttons(buttons),
            Self::Mk3(d) => d.set_buttons(buttons),
        }
    }
}

/// Scan the visible MIDI ports and connect to the first supported Launchpad.
///
/// Newer generations are tried first, because the MK1's port name pattern is
/// a substring of the others'. A generation only matches when both an input
/// and an output port carry its pattern.
pub fn auto_detect() -> Result<AnyLaunchpad, Error> {
    let midi_input = midir::MidiInput::new(crate::APPLICATION_NAME)?;
    let midi_output = midir::MidiOutput::new(crate::APPLICATION_NAME)?;
    let input_names = port_names(&midi_input);
    let output_names = port_names(&midi_output);

    let matches_both = |keyword: &str| {
        input_names.iter().any(|name| name.contains(keyword))
            && output_names.iter().any(|name| name.contains(keyword))
    };

    if matches_both(launchpad_mk3::Output::MIDI_DEVICE_KEYWORD) {
        log::info!("Auto-detected a Launchpad MK3");
        return Ok(AnyLaunchpad::Mk3(launchpad_mk3::Output::guess()?));
    }
    if matches_both(launchpad_mk2::Output::MIDI_DEVICE_KEYWORD) {
        log::info!("Auto-detected a Launchpad MK2");
        return Ok(AnyLaunchpad::Mk2(launchpad_mk2::Output::guess()?));
    }
    if matches_both(launchpad_mk1::Output::MIDI_DEVICE_KEYWORD) {
        log::info!("Auto-detected a Launchpad MK1");
        return Ok(AnyLaunchpad::Mk1(launchpad_mk1::Output::guess()?));
    }

    Err(Error::NoSupportedLaunchpad {
        available: output_names,
    })
}

/// Like [`auto_detect`], but also opens the matching input port in polling
/// mode. The output handshake is sent before the input connects, so the
/// poller's first event is [`Event::Ready`] on an already initialized device.
pub fn auto_detect_polling() -> Result<(AnyLaunchpad, EventPoller), Error> {
    let device = auto_detect()?;

    let poller = match &device {
        AnyLaunchpad::Mk1(_) => launchpad_mk1::Input::guess_polling()?,
        AnyLaunchpad::Mk2(_) => launchpad_mk2::Input::guess_polling()?,
        AnyLaunchpad::Mk3(_) => launchpad_mk3::Input::guess_polling()?,
    };

    Ok((device, poller))
}

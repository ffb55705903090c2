use midir::{MidiInput, MidiInputConnection, MidiInputPort, MidiOutput, MidiOutputConnection};

use crate::{ok_or_continue, Error, Event};

/// Find the first port whose name contains `keyword`.
pub(crate) fn guess_port<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Option<T::Port> {
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));

        if name.contains(keyword) {
            return Some(port);
        }
    }

    None
}

/// The names of all currently visible ports, used for discovery diagnostics.
pub(crate) fn port_names<T: midir::MidiIO>(midi_io: &T) -> Vec<String> {
    let mut names = Vec::new();
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));
        names.push(name);
    }
    names
}

/// The low-level output half of a Launchpad connection. Implementors wrap a
/// single `midir` output connection and know which device name to search for.
pub trait OutputDevice
where
    Self: Sized,
{
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;

    /// Initiate from an existing midir connection. This sends the device's
    /// mandatory mode-switch handshake, where the generation has one; when
    /// this returns `Ok`, the device is ready to accept LED commands.
    fn from_connection(connection: MidiOutputConnection) -> Result<Self, Error>;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Search the MIDI output ports for the first one matching this device's
    /// keyword and connect to it.
    fn guess() -> Result<Self, Error> {
        let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_output, Self::MIDI_DEVICE_KEYWORD).ok_or_else(|| {
            Error::NoPortFound {
                keyword: Self::MIDI_DEVICE_KEYWORD,
                available: port_names(&midi_output),
            }
        })?;

        let connection = midi_output.connect(&port, Self::MIDI_CONNECTION_NAME)?;

        Self::from_connection(connection)
    }
}

/// Keeps an input connection alive in callback mode. Events are delivered to
/// the closure passed to [`InputDevice::from_port`]; when this handler is
/// dropped, the connection is closed.
pub struct InputDeviceHandler {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
}

/// Keeps an input connection alive in polling mode and buffers incoming
/// [`Event`]s until the application asks for them.
pub struct EventPoller {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
    receiver: std::sync::mpsc::Receiver<Event>,
}

impl EventPoller {
    /// Wait for an event to arrive, and return that. For a non-blocking
    /// variant, see [`Self::try_recv`].
    pub fn recv(&self) -> Event {
        self.receiver
            .recv()
            .expect("Event sender has hung up - please report a bug")
    }

    /// If there is a pending event, return that. Otherwise, return `None`.
    ///
    /// This function does not block.
    pub fn try_recv(&self) -> Option<Event> {
        use std::sync::mpsc::TryRecvError;
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                panic!("Event sender has hung up - please report a bug")
            }
        }
    }

    /// Receive a single event. If no event arrives within the timespan
    /// specified by `timeout`, `None` is returned.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Event> {
        use std::sync::mpsc::RecvTimeoutError;
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                panic!("Event sender has hung up - please report a bug")
            }
        }
    }

    /// Returns an iterator over all arriving events. The iterator will only
    /// return when the MIDI connection has been dropped.
    ///
    /// For an iteration method that doesn't block, but returns immediately
    /// when there are no more pending events, see [`Self::iter_pending`].
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.receiver.iter()
    }

    /// Returns an iterator over the currently pending events. As soon as all
    /// pending events have been iterated over, the iterator will return.
    pub fn iter_pending(&self) -> impl Iterator<Item = Event> + '_ {
        self.receiver.try_iter()
    }

    /// Discard any pending events and return how many there were.
    ///
    /// Useful on startup: a Launchpad queues up button presses while
    /// disconnected and releases them all at once as soon as someone
    /// connects, and in most cases you don't want to handle those stale
    /// messages.
    pub fn drain(&self) -> usize {
        self.iter_pending().count()
    }
}

/// The low-level input half of a Launchpad connection.
///
/// For every incoming message the wiring first emits [`Event::Raw`] with the
/// untouched bytes, then the decoded button event, if any. Decoding is
/// lenient and never fails; see each generation's `parse_button`.
pub trait InputDevice {
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;

    /// Decode a single incoming message into a button event. Returns `None`
    /// for messages that aren't button-related (e.g. SysEx replies).
    fn decode_message(timestamp: u64, data: &[u8]) -> Option<Event>;

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port<F>(
        midi_input: MidiInput,
        port: &MidiInputPort,
        mut user_callback: F,
    ) -> Result<InputDeviceHandler, Error>
    where
        F: FnMut(Event) + Send + 'static,
        Self: 'static,
    {
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut ()| {
            (user_callback)(Event::Raw {
                data: data.to_vec(),
            });
            if let Some(event) = Self::decode_message(timestamp, data) {
                (user_callback)(event);
            }
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;

        Ok(InputDeviceHandler { connection })
    }

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port_polling(midi_input: MidiInput, port: &MidiInputPort) -> Result<EventPoller, Error>
    where
        Self: 'static,
    {
        let device_name = midi_input.port_name(port)?;

        let (sender, receiver) = std::sync::mpsc::channel();
        let callback_sender = sender.clone();
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut ()| {
            // The receiver can only be gone while the poller itself is being
            // torn down, in which case nobody cares about the event anymore.
            let _ = callback_sender.send(Event::Raw {
                data: data.to_vec(),
            });
            if let Some(event) = Self::decode_message(timestamp, data) {
                let _ = callback_sender.send(event);
            }
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;

        // One-shot readiness signal, queued before any button event can be.
        let _ = sender.send(Event::Ready { device_name });

        Ok(EventPoller {
            connection,
            receiver,
        })
    }

    /// Search the MIDI input ports for the first one matching this device's
    /// keyword and connect to it in callback mode.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess<F>(user_callback: F) -> Result<InputDeviceHandler, Error>
    where
        F: FnMut(Event) + Send + 'static,
        Self: 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, Self::MIDI_DEVICE_KEYWORD).ok_or_else(|| {
            Error::NoPortFound {
                keyword: Self::MIDI_DEVICE_KEYWORD,
                available: port_names(&midi_input),
            }
        })?;

        Self::from_port(midi_input, &port, user_callback)
    }

    /// Search the MIDI input ports for the first one matching this device's
    /// keyword and connect to it in polling mode.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess_polling() -> Result<EventPoller, Error>
    where
        Self: 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, Self::MIDI_DEVICE_KEYWORD).ok_or_else(|| {
            Error::NoPortFound {
                keyword: Self::MIDI_DEVICE_KEYWORD,
                available: port_names(&midi_input),
            }
        })?;

        Self::from_port_polling(midi_input, &port)
    }
}

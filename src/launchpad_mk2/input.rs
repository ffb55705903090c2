use super::parse_button;
use crate::{Event, InputDevice};

/// The input half of a Launchpad MK2 connection. Presses carry a nonzero
/// third byte; releases a zero one.
pub struct Input;

impl InputDevice for Input {
    const MIDI_CONNECTION_NAME: &'static str = "Padlight MK2 input";
    const MIDI_DEVICE_KEYWORD: &'static str = "Launchpad MK2";

    fn decode_message(_timestamp: u64, data: &[u8]) -> Option<Event> {
        let &[status, note, value] = data else {
            return None;
        };

        let button = parse_button(status, note);
        Some(if value > 0 {
            Event::Press { button }
        } else {
            Event::Release { button }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Button;

    #[test]
    fn press_and_release() {
        assert_eq!(
            Input::decode_message(0, &[144, 81, 127]),
            Some(Event::Press {
                button: Button::new(81, (0, 1))
            })
        );
        assert_eq!(
            Input::decode_message(0, &[144, 81, 0]),
            Some(Event::Release {
                button: Button::new(81, (0, 1))
            })
        );
    }

    #[test]
    fn sysex_replies_are_skipped() {
        assert_eq!(Input::decode_message(0, &[240, 0, 32, 41, 2, 24, 247]), None);
    }
}

use super::parse_button;
use crate::{Event, InputDevice};

/// The input half of a first-generation Launchpad connection.
///
/// Presses arrive as note on with nonzero velocity (grid) or controller
/// change with nonzero value (control row); a zero third byte is a release.
pub struct Input;

impl InputDevice for Input {
    const MIDI_CONNECTION_NAME: &'static str = "Padlight MK1 input";
    const MIDI_DEVICE_KEYWORD: &'static str = "Launchpad";

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
            Input::decode_message(0, &[144, 68, 127]),
            Some(Event::Press {
                button: Button::new(68, (4, 5))
            })
        );
        assert_eq!(
            Input::decode_message(0, &[144, 68, 0]),
            Some(Event::Release {
                button: Button::new(68, (4, 5))
            })
        );
    }

    #[test]
    fn control_row_events() {
        assert_eq!(
            Input::decode_message(0, &[176, 108, 127]),
            Some(Event::Press {
                button: Button::new(108, (4, 0))
            })
        );
    }

    #[test]
    fn non_button_messages_are_skipped() {
        assert_eq!(Input::decode_message(0, &[240, 126, 0, 6, 247]), None);
        assert_eq!(Input::decode_message(0, &[248]), None);
    }
}

use crate::RgbColor;

/// The identity of one physical pad, as reported by button events.
///
/// Carries both the protocol-specific button number and the zero-based
/// `(x, y)` grid coordinate (top-left is `(0, 0)`, row 0 is the control row
/// where the device has one). Both views describe the same pad under the
/// active generation's mapping.
///
/// On the MK1 the mapping is not injective: the top-left control button and
/// the grid button at `(8, 7)` share number 104. Coordinate addressing
/// always resolves the ambiguity; see [`crate::launchpad_mk1`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Button {
    /// The protocol-specific button number. Range and layout depend on the
    /// generation.
    pub nr: u8,
    /// Zero-based `(column, row)` coordinate, or [`Button::INVALID_XY`] when
    /// the incoming message could not be attributed to the grid.
    pub xy: (i8, i8),
}

impl Button {
    /// Sentinel coordinate for messages with an unrecognized status byte.
    /// Decoding is lenient: a noisy device degrades to this value instead of
    /// failing the event pipeline.
    pub const INVALID_XY: (i8, i8) = (-1, -1);

    pub fn new(nr: u8, xy: (i8, i8)) -> Self {
        Self { nr, xy }
    }
}

/// A button argument as accepted by the output API: a raw protocol number, a
/// `(x, y)` coordinate pair, or a full [`Button`] struct.
///
/// All three forms are normalized to a protocol number at the API boundary
/// (see each generation's `map_button`). A bare number passes through
/// unchanged, and a struct's `nr` is trusted directly; only coordinate pairs
/// go through the generation's coordinate math.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ButtonIn {
    Number(u8),
    Coord { x: u8, y: u8 },
    Button(Button),
}

impl From<u8> for ButtonIn {
    fn from(nr: u8) -> Self {
        Self::Number(nr)
    }
}

impl From<(u8, u8)> for ButtonIn {
    fn from((x, y): (u8, u8)) -> Self {
        Self::Coord { x, y }
    }
}

impl From<[u8; 2]> for ButtonIn {
    fn from([x, y]: [u8; 2]) -> Self {
        Self::Coord { x, y }
    }
}

impl From<Button> for ButtonIn {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

/// How a button should currently render. This is the unit stored in a
/// [`Layer`](crate::Layer) cell and diffed by [`Surface`](crate::Surface).
///
/// On higher surface layers, `Off` and `Palette(0)` are not the same thing:
/// `Off` lets the layers beneath show through, while palette color 0
/// actively turns the button off.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    #[default]
    Off,
    Palette {
        color: u8,
    },
    Rgb {
        rgb: RgbColor,
    },
    /// Flash between `color` and `color_b` (or black, when absent) on a 50%
    /// duty cycle.
    Flash {
        color: u8,
        color_b: Option<u8>,
    },
    Pulse {
        color: u8,
    },
}

impl Style {
    pub fn is_off(&self) -> bool {
        matches!(self, Style::Off)
    }
}

/// One entry in a batched [`set_buttons`](crate::Launchpad::set_buttons)
/// update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonStyle {
    pub button: ButtonIn,
    pub style: Style,
}

impl ButtonStyle {
    pub fn new(button: impl Into<ButtonIn>, style: Style) -> Self {
        Self {
            button: button.into(),
            style,
        }
    }
}

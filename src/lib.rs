//! Device-independent control of Novation Launchpad grid controllers.
//!
//! All three Launchpad generations are supported behind the same API: the
//! original Launchpad / Launchpad S, the Launchpad MK2, and the Launchpad X /
//! Mini MK3. [`auto_detect`] figures out which one is plugged in.
//!
//! Buttons can be addressed by protocol number or by `(x, y)` coordinate,
//! where `(0, 0)` is the top-left control button and row 1 is the first grid
//! row. Colors are either an index into the device palette or a
//! device-independent RGB value that gets scaled to whatever the hardware can
//! show.
//!
//! ```no_run
//! use padlight::{auto_detect_polling, Event, Grid, RgbColor, Style, Surface};
//!
//! # fn main() -> Result<(), padlight::Error> {
//! let (device, poller) = auto_detect_polling()?;
//! let mut surface = Surface::new(device)?;
//!
//! for event in poller.iter() {
//!     if let Event::Press { button } = event {
//!         let (x, y) = button.xy;
//!         surface.set(x as i32, y as i32, Style::Rgb { rgb: RgbColor::ORANGE });
//!         surface.update()?;
//!     }
//! }
//! # Ok(()) }
//! ```
//!
//! For rendering, [`Surface`] keeps an in-memory display buffer in stackable
//! [`Layer`]s and only sends the cells that actually changed; [`Drawing`]
//! adds bitmap, rectangle and scroll helpers. For direct control, every
//! generation's `Output` implements [`Launchpad`], and [`MockLaunchpad`]
//! stands in when no hardware is around.

mod util;

mod errors;
pub use errors::Error;

mod button;
pub use button::*;

mod color;
pub use color::*;
pub(crate) use color::validate_palette_color;

pub(crate) mod sysex;

mod midi_io;
pub use midi_io::*;

mod device;
pub use device::*;

pub mod launchpad_mk1;
pub mod launchpad_mk2;
pub mod launchpad_mk3;

/// Convenience aliases for the generation modules.
pub use launchpad_mk1 as mk1;
pub use launchpad_mk2 as mk2;
pub use launchpad_mk3 as mk3;

mod surface;
pub use surface::*;

pub mod mock;
pub use mock::MockLaunchpad;

/// The client name this library registers with the system MIDI service.
pub(crate) const APPLICATION_NAME: &str = "Padlight";

pub mod prelude {
    pub use crate::Grid as _;
    pub use crate::InputDevice as _;
    pub use crate::Launchpad as _;
    pub use crate::OutputDevice as _;
}

//! A layered display buffer with diff-minimizing rendering.
//!
//! [`Surface`] tracks what the device currently shows and what the
//! application wants shown, and sends only the difference on
//! [`Surface::update`]. [`Layer`]s stack on top of each other, so temporary
//! colors (while a button is held down, say) can live on a higher layer and
//! vanish without disturbing what's underneath. [`Drawing`] adds bitmap,
//! rectangle and scroll helpers on top of any [`Grid`].

mod grid;
pub use grid::*;

mod layer;
pub use layer::*;

#[allow(clippy::module_inception)]
mod surface;
pub use surface::*;

mod drawing;
pub use drawing::*;

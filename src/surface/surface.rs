use std::collections::BTreeMap;

use super::{Grid, Layer};
use crate::{ButtonStyle, Error, Launchpad, Style};

/// The visible surface of a Launchpad.
///
/// Tracks an in-memory display buffer which is written to the device on
/// [`Self::update`]; only the cells that changed since the last update are
/// sent. Cell `(x, y)` renders to device coordinate `(x, y)`, so row 0 is
/// the control row.
///
/// Styles live on numbered layers, flattened top-most-wins on update.
/// Setting cells on the surface directly is the same as setting them on
/// layer 0. On higher layers, [`Style::Off`] lets lower layers show through
/// while palette color 0 actively turns the button off.
///
/// There should only be one surface in use for any Launchpad at a given
/// time.
pub struct Surface<D: Launchpad> {
    device: D,
    layers: BTreeMap<u32, Layer>,
    current_display: Layer,
    width: u32,
    height: u32,
}

impl<D: Launchpad> Surface<D> {
    /// Wrap a device in a 9x9 surface (8x8 grid plus control row and side
    /// column). Clears the device so the empty display buffer and the
    /// hardware state start out in sync.
    pub fn new(device: D) -> Result<Self, Error> {
        Self::with_size(device, 9, 9)
    }

    pub fn with_size(mut device: D, width: u32, height: u32) -> Result<Self, Error> {
        device.all_off()?;

        let mut layers = BTreeMap::new();
        layers.insert(0, Layer::new(width, height));

        Ok(Self {
            device,
            layers,
            current_display: Layer::new(width, height),
            width,
            height,
        })
    }

    /// Create or return the layer at the given index.
    pub fn layer(&mut self, i: u32) -> &mut Layer {
        let (width, height) = (self.width, self.height);
        self.layers
            .entry(i)
            .or_insert_with(|| Layer::new(width, height))
    }

    /// Remove the layer at the given index. Layer 0 is the base layer and
    /// cannot be removed; removing an absent layer is a no-op.
    pub fn remove_layer(&mut self, i: u32) -> Result<(), Error> {
        if i == 0 {
            return Err(Error::RemoveLayerZero);
        }
        self.layers.remove(&i);
        Ok(())
    }

    /// Send the current display buffer to the device.
    ///
    /// Flattens the layer stack, diffs it against what the device is known
    /// to show, and batches the changed cells into one
    /// [`set_buttons`](Launchpad::set_buttons) call. When nothing changed,
    /// nothing is sent.
    pub fn update(&mut self) -> Result<(), Error> {
        let new_display = self.flat();

        let mut updates = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let current = self.current_display.get(x as i32, y as i32);
                let updated = new_display.get(x as i32, y as i32);
                if current != updated {
                    updates.push(ButtonStyle::new((x as u8, y as u8), updated));
                }
            }
        }

        if !updates.is_empty() {
            self.device.set_buttons(&updates)?;
        }
        self.current_display = new_display;
        Ok(())
    }

    /// Access the wrapped device, e.g. for operations the surface doesn't
    /// abstract over.
    pub fn device(&mut self) -> &mut D {
        &mut self.device
    }

    fn base_layer(&self) -> &Layer {
        self.layers
            .get(&0)
            .expect("layer 0 always exists - please report a bug")
    }

    /// Flatten the layer stack bottom-up; non-off cells of higher layers
    /// overwrite whatever lies beneath.
    fn flat(&self) -> Layer {
        let mut flattened = Layer::new(self.width, self.height);

        for layer in self.layers.values() {
            for y in 0..self.height as i32 {
                for x in 0..self.width as i32 {
                    let style = layer.get(x, y);
                    if !style.is_off() {
                        flattened.set(x, y, style);
                    }
                }
            }
        }

        flattened
    }
}

impl<D: Launchpad> Grid for Surface<D> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, style: Style) {
        self.layer(0).set(x, y, style);
    }

    fn get(&self, x: i32, y: i32) -> Style {
        self.base_layer().get(x, y)
    }

    fn all_off(&mut self) {
        self.layer(0).all_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockCall, MockLaunchpad};
    use crate::ButtonIn;

    #[test]
    fn construction_clears_the_device() {
        let mut device = MockLaunchpad::new();
        let _surface = Surface::new(&mut device).unwrap();
        assert_eq!(device.calls, vec![MockCall::AllOff]);
    }

    #[test]
    fn update_sends_only_the_difference() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(3, 4, Style::Palette { color: 5 });
        surface.set(0, 0, Style::Palette { color: 9 });
        surface.update().unwrap();

        // Second frame: one cell changes, one stays, so only one entry goes
        // out.
        surface.set(3, 4, Style::Palette { color: 6 });
        surface.update().unwrap();

        assert_eq!(
            device.calls,
            vec![
                MockCall::AllOff,
                MockCall::SetButtons(vec![
                    ButtonStyle::new((0u8, 0u8), Style::Palette { color: 9 }),
                    ButtonStyle::new((3u8, 4u8), Style::Palette { color: 5 }),
                ]),
                MockCall::SetButtons(vec![ButtonStyle::new(
                    (3u8, 4u8),
                    Style::Palette { color: 6 }
                )]),
            ]
        );
    }

    #[test]
    fn set_then_get_round_trips_before_update() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        let style = Style::Flash { color: 3, color_b: Some(4) };
        surface.set(5, 6, style);
        assert_eq!(surface.get(5, 6), style);
        // Nothing hit the device yet.
        assert_eq!(device.calls, vec![MockCall::AllOff]);
    }

    #[test]
    fn unchanged_frame_sends_nothing() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(1, 1, Style::Palette { color: 3 });
        surface.update().unwrap();
        surface.update().unwrap();

        let batches = device
            .calls
            .iter()
            .filter(|call| matches!(call, MockCall::SetButtons(_)))
            .count();
        assert_eq!(batches, 1);
    }

    #[test]
    fn higher_layers_win_and_show_through_when_off() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(2, 2, Style::Palette { color: 3 });
        surface.layer(5).set(2, 2, Style::Palette { color: 7 });
        surface.update().unwrap();

        surface.remove_layer(5).unwrap();
        surface.update().unwrap();

        let batches: Vec<_> = device
            .calls
            .iter()
            .filter_map(|call| match call {
                MockCall::SetButtons(entries) => Some(entries.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            batches,
            vec![
                vec![ButtonStyle::new((2u8, 2u8), Style::Palette { color: 7 })],
                vec![ButtonStyle::new((2u8, 2u8), Style::Palette { color: 3 })],
            ]
        );
    }

    #[test]
    fn clearing_an_overlay_cell_reveals_the_base_layer() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(4, 4, Style::Palette { color: 3 });
        surface.layer(1).set(4, 4, Style::Palette { color: 7 });
        surface.update().unwrap();

        surface.layer(1).set(4, 4, Style::Off);
        surface.update().unwrap();

        assert_eq!(
            device.calls.last(),
            Some(&MockCall::SetButtons(vec![ButtonStyle::new(
                (4u8, 4u8),
                Style::Palette { color: 3 }
            )]))
        );
    }

    #[test]
    fn palette_zero_on_a_higher_layer_turns_the_button_off() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(2, 2, Style::Palette { color: 3 });
        surface.layer(1).set(2, 2, Style::Palette { color: 0 });
        surface.update().unwrap();

        assert_eq!(
            device.calls.last(),
            Some(&MockCall::SetButtons(vec![ButtonStyle::new(
                (2u8, 2u8),
                Style::Palette { color: 0 }
            )]))
        );
    }

    #[test]
    fn layer_zero_cannot_be_removed() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();
        assert!(matches!(
            surface.remove_layer(0),
            Err(Error::RemoveLayerZero)
        ));
        // Removing an absent layer is fine.
        surface.remove_layer(42).unwrap();
    }

    #[test]
    fn update_emits_coordinate_buttons() {
        let mut device = MockLaunchpad::new();
        let mut surface = Surface::new(&mut device).unwrap();

        surface.set(0, 0, Style::Palette { color: 1 });
        surface.update().unwrap();

        match device.calls.last() {
            Some(MockCall::SetButtons(entries)) => {
                assert_eq!(entries[0].button, ButtonIn::Coord { x: 0, y: 0 });
            }
            other => panic!("expected a batch, got {other:?}"),
        }
    }
}

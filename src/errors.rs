use crate::RgbColor;

fn fmt_port_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// The error type for everything that can go wrong in this library: transport
/// failures from `midir`, device discovery failures, and argument validation
/// failures.
///
/// Validation errors are raised before any bytes are handed to the transport,
/// so a failed call never results in a partial write.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("MIDI context initialization failed")]
    Init(#[from] midir::InitError),

    #[error("connecting to MIDI input port failed")]
    InputConnect(#[from] midir::ConnectError<midir::MidiInput>),

    #[error("connecting to MIDI output port failed")]
    OutputConnect(#[from] midir::ConnectError<midir::MidiOutput>),

    #[error("MIDI port retrieval failed")]
    PortInfo(#[from] midir::PortInfoError),

    #[error("sending MIDI message failed")]
    Send(#[from] midir::SendError),

    /// No port matched a single driver's device keyword.
    #[error("no '{keyword}' device found, discovered ports: {}", fmt_port_names(.available))]
    NoPortFound {
        keyword: &'static str,
        available: Vec<String>,
    },

    /// Auto-detection went through every known device pattern without a hit.
    #[error("no supported Launchpad found among MIDI devices: {}", fmt_port_names(.available))]
    NoSupportedLaunchpad { available: Vec<String> },

    /// A palette color index outside the device's palette.
    #[error("palette color {color} is out of range, must be within 0..={max}")]
    InvalidPaletteColor { color: u8, max: u8 },

    /// An RGB color with a component outside `0.0..=1.0`.
    #[error("RGB color {color:?} is invalid, components must be within 0.0..=1.0")]
    InvalidRgbColor { color: RgbColor },

    /// Layer 0 is the surface's base layer and cannot be removed.
    #[error("layer 0 cannot be removed")]
    RemoveLayerZero,
}

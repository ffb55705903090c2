//! SysEx framing shared by the MK2 and MK3 drivers.
//!
//! The MK1 speaks plain channel messages for per-button writes and is not
//! routed through here.

pub(crate) const SYSEX_START: u8 = 240;
pub(crate) const SYSEX_END: u8 = 247;

/// The manufacturer header all Launchpad SysEx messages share. The model byte
/// that follows it distinguishes the generations.
const NOVATION_HEADER: [u8; 4] = [0, 32, 41, 2];

/// Wrap `payload` in the SysEx envelope for the given model byte:
/// `[240, 0, 32, 41, 2, <model>, ..payload, 247]`.
pub(crate) fn make_sysex(model_byte: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(payload.len() + 7);
    bytes.push(SYSEX_START);
    bytes.extend(NOVATION_HEADER);
    bytes.push(model_byte);
    bytes.extend(payload);
    bytes.push(SYSEX_END);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_layout() {
        assert_eq!(make_sysex(24, &[14, 0]), [240, 0, 32, 41, 2, 24, 14, 0, 247]);
        assert_eq!(make_sysex(13, &[]), [240, 0, 32, 41, 2, 13, 247]);
    }
}

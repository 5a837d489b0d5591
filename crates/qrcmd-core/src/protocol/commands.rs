//! Frame constants and the device command type enumeration.

// ── Frame constants ───────────────────────────────────────────────────────────

/// Fixed header byte opening every frame.
pub const FRAME_HEADER: u8 = 0xA8;

/// Minimum frame size in bytes: header + type + length + checksum.
/// Content may be zero-length.
pub const MIN_FRAME_LEN: usize = 4;

/// Largest content a frame can carry; the length field is a single byte.
pub const MAX_CONTENT_LEN: usize = 255;

// ── Command type codes ────────────────────────────────────────────────────────

/// All device-control command codes the frame format recognizes.
///
/// The set is closed: any other type byte makes the whole frame invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandType {
    /// Restart the device.
    Reboot = 0x01,
    /// Clear device-local state.
    Clear = 0x02,
    /// Power the device off.
    Shutdown = 0x03,
}

impl CommandType {
    /// Every recognized command, in wire-code order. Handy for tests and for
    /// generator UIs that enumerate the available commands.
    pub const ALL: [CommandType; 3] =
        [CommandType::Reboot, CommandType::Clear, CommandType::Shutdown];
}

impl TryFrom<u8> for CommandType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x01 => Ok(CommandType::Reboot),
            0x02 => Ok(CommandType::Clear),
            0x03 => Ok(CommandType::Shutdown),
            _ => Err(()),
        }
    }
}

// ── Decoded frame ─────────────────────────────────────────────────────────────

/// A successfully decoded command frame.
///
/// Values are transient: one is produced per decode call and nothing in this
/// crate caches or mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCommand {
    /// Which operation the frame requests.
    pub command: CommandType,
    /// Opaque content bytes; empty for the common bare commands.
    pub content: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_type_round_trips_through_wire_byte() {
        for cmd in CommandType::ALL {
            assert_eq!(CommandType::try_from(cmd as u8), Ok(cmd));
        }
    }

    #[test]
    fn test_unknown_type_bytes_are_rejected() {
        for byte in [0x00, 0x04, 0x05, 0x7F, 0xA8, 0xFF] {
            assert_eq!(CommandType::try_from(byte), Err(()));
        }
    }
}

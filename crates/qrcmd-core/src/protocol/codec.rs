//! Validation, decoding, and encoding of device-command frames.
//!
//! Wire format:
//! ```text
//! [header:1 = 0xA8][type:1][length:1][content:N = length][crc8:1]
//! ```
//! Minimum frame size is 4 bytes (empty content). The trailing byte is a
//! CRC-8/CCITT over everything before it.
//!
//! A frame is either valid or it is not: there is no repair, padding
//! tolerance, or partial decode. The validation chain runs in a fixed order
//! (length, header, type, length consistency, checksum) and short-circuits
//! on the first failure.

use tracing::trace;

use crate::protocol::commands::{
    CommandType, DeviceCommand, FRAME_HEADER, MAX_CONTENT_LEN, MIN_FRAME_LEN,
};
use crate::protocol::crc8::crc8;
use thiserror::Error;

/// Reasons a byte sequence is not a valid command frame.
///
/// Scanning callers normally collapse all of these into "ignore the scan"
/// via [`is_command_frame`]; the variants exist so tests and diagnostics can
/// tell the rejection causes apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    /// The sequence is shorter than the 4-byte minimum frame.
    #[error("frame too short: need at least 4 bytes, got {0}")]
    TooShort(usize),

    /// The first byte is not the fixed frame header.
    #[error("bad header byte: expected 0xA8, got 0x{0:02X}")]
    BadHeader(u8),

    /// The type byte is outside the recognized command set.
    #[error("unknown command type: 0x{0:02X}")]
    UnknownType(u8),

    /// The length byte disagrees with the actual content size.
    #[error("length mismatch: length byte declares {declared} content bytes, frame carries {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// The trailing checksum byte does not match the computed CRC-8.
    #[error("checksum mismatch: computed 0x{computed:02X}, frame carries 0x{carried:02X}")]
    ChecksumMismatch { computed: u8, carried: u8 },

    /// Content handed to the encoder exceeds the single length byte's range.
    #[error("content too long: {0} bytes, the length field caps content at 255")]
    ContentTooLong(usize),

    /// The hex transport string could not be decoded to bytes.
    #[error("invalid hex payload: {0}")]
    BadHex(#[from] hex::FromHexError),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Validates `frame` and decodes its command and content.
///
/// Accepts any byte sequence, empty included, and never panics: scanned QR
/// content is attacker-controlled and mostly unrelated payloads, so a
/// malformed frame is the expected case, reported as an `Err` value.
///
/// # Errors
///
/// Returns the [`FrameError`] for the first check in the chain that fails.
///
/// # Examples
///
/// ```rust
/// use qrcmd_core::{parse_frame, CommandType};
///
/// let cmd = parse_frame(&[0xA8, 0x02, 0x00, 0x33]).unwrap();
/// assert_eq!(cmd.command, CommandType::Clear);
/// assert!(cmd.content.is_empty());
/// ```
pub fn parse_frame(frame: &[u8]) -> Result<DeviceCommand, FrameError> {
    match validate(frame) {
        Ok(cmd) => Ok(cmd),
        Err(err) => {
            trace!(len = frame.len(), %err, "rejected frame");
            Err(err)
        }
    }
}

/// Returns `true` if `frame` is a valid command frame of any type.
pub fn is_command_frame(frame: &[u8]) -> bool {
    parse_frame(frame).is_ok()
}

/// Returns `true` if `frame` is a valid command frame of exactly `want`.
///
/// Fast path for callers matching against one command: the header and type
/// bytes are compared before any length or checksum work, so a frame of the
/// wrong type costs two byte comparisons. Observationally equivalent to
/// [`parse_frame`] filtered by type.
pub fn is_frame_of_type(frame: &[u8], want: CommandType) -> bool {
    if frame.len() < MIN_FRAME_LEN {
        return false;
    }
    if frame[0] != FRAME_HEADER || frame[1] != want as u8 {
        return false;
    }
    let declared = frame[2] as usize;
    if declared != frame.len() - MIN_FRAME_LEN {
        return false;
    }
    crc8(&frame[..frame.len() - 1]) == frame[frame.len() - 1]
}

/// Builds the frame carrying `command` with `content`.
///
/// # Errors
///
/// Returns [`FrameError::ContentTooLong`] when `content` exceeds 255 bytes;
/// the length field is a single byte and the cap is a protocol limit, not
/// something the encoder may widen.
pub fn encode_frame(command: CommandType, content: &[u8]) -> Result<Vec<u8>, FrameError> {
    if content.len() > MAX_CONTENT_LEN {
        return Err(FrameError::ContentTooLong(content.len()));
    }
    let mut buf = Vec::with_capacity(MIN_FRAME_LEN + content.len());
    buf.push(FRAME_HEADER);
    buf.push(command as u8);
    buf.push(content.len() as u8);
    buf.extend_from_slice(content);
    buf.push(crc8(&buf));
    Ok(buf)
}

// ── Hex transport entry points ────────────────────────────────────────────────
//
// The QR transport carries frames as hex text (e.g. "A8020033"). Decoding is
// case-insensitive; a string that is not valid hex is rejected exactly like
// a structurally invalid frame.

/// Decodes a hex payload string and parses the resulting bytes.
///
/// # Errors
///
/// Returns [`FrameError::BadHex`] for odd-length or non-hex input, otherwise
/// whatever [`parse_frame`] returns for the decoded bytes.
pub fn parse_frame_hex(payload: &str) -> Result<DeviceCommand, FrameError> {
    let bytes = hex::decode(payload)?;
    parse_frame(&bytes)
}

/// Returns `true` if the hex payload decodes to a valid frame of any type.
pub fn is_command_frame_hex(payload: &str) -> bool {
    parse_frame_hex(payload).is_ok()
}

/// Returns `true` if the hex payload decodes to a valid frame of `want`.
pub fn is_frame_of_type_hex(payload: &str, want: CommandType) -> bool {
    match hex::decode(payload) {
        Ok(bytes) => is_frame_of_type(&bytes, want),
        Err(_) => false,
    }
}

/// Encodes a frame and renders it as the uppercase hex string placed in a
/// QR code.
///
/// # Errors
///
/// Same as [`encode_frame`].
pub fn encode_frame_hex(command: CommandType, content: &[u8]) -> Result<String, FrameError> {
    Ok(hex::encode_upper(encode_frame(command, content)?))
}

// ── Validation chain ──────────────────────────────────────────────────────────

fn validate(frame: &[u8]) -> Result<DeviceCommand, FrameError> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(FrameError::TooShort(frame.len()));
    }
    if frame[0] != FRAME_HEADER {
        return Err(FrameError::BadHeader(frame[0]));
    }
    let command =
        CommandType::try_from(frame[1]).map_err(|()| FrameError::UnknownType(frame[1]))?;

    let declared = frame[2] as usize;
    let actual = frame.len() - MIN_FRAME_LEN;
    if declared != actual {
        return Err(FrameError::LengthMismatch { declared, actual });
    }

    let computed = crc8(&frame[..frame.len() - 1]);
    let carried = frame[frame.len() - 1];
    if computed != carried {
        return Err(FrameError::ChecksumMismatch { computed, carried });
    }

    Ok(DeviceCommand {
        command,
        content: frame[3..3 + declared].to_vec(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

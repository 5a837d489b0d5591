//! # qrcmd-core
//!
//! Frame codec for device-control commands carried in QR codes.
//!
//! Devices in the field are administered by showing them a QR code; the QR
//! payload is a hex string encoding one tiny binary frame that tells the
//! device to reboot, clear its state, or shut down. This crate is the shared
//! codec for that frame format: it validates a scanned payload, extracts the
//! command and its opaque content, and builds frames for the generator side.
//! It has zero dependencies on QR imaging, UI frameworks, or I/O.
//!
//! Wire format (fixed width, no versioning):
//!
//! ```text
//! [header:1 = 0xA8][type:1][length:1][content:N = length][crc8:1]
//! ```
//!
//! Scanned QR content is untrusted and usually unrelated (arbitrary URLs,
//! other payloads), so rejection is the common case: the `is_*` entry points
//! collapse every failure into `false` and nothing here ever panics on
//! malformed input.
//!
//! ```rust
//! use qrcmd_core::{is_command_frame_hex, parse_frame_hex, CommandType};
//!
//! assert!(is_command_frame_hex("A8020033"));
//! let cmd = parse_frame_hex("A8020033").unwrap();
//! assert_eq!(cmd.command, CommandType::Clear);
//! assert!(cmd.content.is_empty());
//! ```

pub mod protocol;

// Re-export the full surface at the crate root so callers can write
// `qrcmd_core::parse_frame` instead of `qrcmd_core::protocol::codec::parse_frame`.
pub use protocol::codec::{
    encode_frame, encode_frame_hex, is_command_frame, is_command_frame_hex, is_frame_of_type,
    is_frame_of_type_hex, parse_frame, parse_frame_hex, FrameError,
};
pub use protocol::commands::{
    CommandType, DeviceCommand, FRAME_HEADER, MAX_CONTENT_LEN, MIN_FRAME_LEN,
};
pub use protocol::crc8::crc8;

//! Protocol module containing the command types, frame codec, and checksum.

pub mod codec;
pub mod commands;
pub mod crc8;

pub use codec::{
    encode_frame, encode_frame_hex, is_command_frame, is_command_frame_hex, is_frame_of_type,
    is_frame_of_type_hex, parse_frame, parse_frame_hex, FrameError,
};
pub use commands::*;
pub use crc8::crc8;

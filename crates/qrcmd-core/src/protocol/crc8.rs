//! CRC-8/CCITT checksum primitive guarding command frames.
//!
//! Polynomial 0x07, initial value 0x00, no final XOR, no input or output
//! reflection, MSB-first. Both the generator and the parser must produce
//! bit-identical values, so this is the single shared implementation.

const POLYNOMIAL: u8 = 0x07;

/// Computes the CRC-8/CCITT checksum of `data`.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0x00;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(crc8(&[]), 0x00);
    }

    #[test]
    fn test_all_zero_input_stays_zero() {
        assert_eq!(crc8(&[0x00; 16]), 0x00);
    }

    #[test]
    fn test_standard_check_value() {
        // The canonical CRC-8 (poly 0x07, init 0x00) check input.
        assert_eq!(crc8(b"123456789"), 0xF4);
    }

    #[test]
    fn test_clear_frame_prefix_checksum() {
        // Trailer of the canonical empty Clear frame A8 02 00 33.
        assert_eq!(crc8(&[0xA8, 0x02, 0x00]), 0x33);
    }

    #[test]
    fn test_single_bit_flip_changes_checksum() {
        let base = [0xA8, 0x01, 0x03, 0x10, 0x20, 0x30];
        let reference = crc8(&base);
        for byte_idx in 0..base.len() {
            for bit in 0..8 {
                let mut corrupted = base;
                corrupted[byte_idx] ^= 1 << bit;
                assert_ne!(
                    crc8(&corrupted),
                    reference,
                    "flip of byte {byte_idx} bit {bit} must change the CRC"
                );
            }
        }
    }
}

//! Device UUID read from on-die fuses.
//!
//! Every i.MX RT die carries a factory-programmed unique identifier in the
//! OCOTP fuse bank: a 43-bit encoded lot ID plus the wafer number and the
//! X/Y coordinates of the die on the wafer, packed into two 32-bit words.
//! [`Uuid`] snapshots those words and presents them in the canonical byte
//! order expected by board identity consumers.

use core::fmt;

use crate::{Error, Result};

/// Number of 32-bit fuse words backing the UUID.
pub const UUID_WORD_COUNT: usize = 2;

/// Length of the UUID byte form.
pub const UUID_BYTE_LENGTH: usize = 8;

/// Reordering applied when assembling the byte form from the raw words.
///
/// Output byte `i` copies input byte `BYTE_FORMAT_ORDER[i]` of the raw words
/// as they sit in memory in read order. The reassembled sequence is the
/// big-endian rendering of each word, regardless of host endianness.
const BYTE_FORMAT_ORDER: [usize; UUID_BYTE_LENGTH] = [3, 2, 1, 0, 7, 6, 5, 4];

/// Access to the raw fuse words backing the device identity.
///
/// [`Ocotp`](crate::ocotp::Ocotp) reads the real fuse bank. Tests substitute
/// a reader returning fixed words.
pub trait FuseReader {
    /// Read the raw UUID words, most-significant word first.
    fn read_words(&mut self) -> [u32; UUID_WORD_COUNT];
}

/// Factory-programmed per-die identifier.
///
/// The fuse contents never change after manufacture, so two reads always
/// observe the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uuid {
    words: [u32; UUID_WORD_COUNT],
}

impl Uuid {
    /// Read the MCU on-die UUID.
    pub fn read() -> Self {
        Self::read_from(&mut crate::ocotp::Ocotp)
    }

    /// Read the UUID through a caller-supplied fuse reader.
    pub fn read_from(reader: &mut impl FuseReader) -> Self {
        Self {
            words: reader.read_words(),
        }
    }

    /// Rebuild a UUID from previously captured fuse words.
    pub const fn from_words(words: [u32; UUID_WORD_COUNT]) -> Self {
        Self { words }
    }

    /// The raw fuse words, most-significant word first.
    pub const fn words(&self) -> [u32; UUID_WORD_COUNT] {
        self.words
    }

    /// The UUID in canonical byte order.
    pub fn to_bytes(self) -> [u8; UUID_BYTE_LENGTH] {
        let mut raw = [0; UUID_BYTE_LENGTH];
        raw[..4].copy_from_slice(&self.words[0].to_le_bytes());
        raw[4..].copy_from_slice(&self.words[1].to_le_bytes());

        let mut bytes = [0; UUID_BYTE_LENGTH];
        for (dst, &src) in bytes.iter_mut().zip(BYTE_FORMAT_ORDER.iter()) {
            *dst = raw[src];
        }
        bytes
    }

    /// Returns the UUID as a `u64`, most-significant word first.
    pub fn to_u64(self) -> u64 {
        u64::from(self.words[0]) << 32 | u64::from(self.words[1])
    }

    /// Render the raw words as hex text, optionally separated.
    ///
    /// Each word becomes eight lowercase hex digits; `separator` is placed
    /// between words only. The required capacity is computed from the fixed
    /// word count; if `buf` cannot hold the full rendering the call fails
    /// with [`Error::BufferTooSmall`] and `buf` is untouched.
    pub fn format_into<'a>(&self, buf: &'a mut [u8], separator: Option<&str>) -> Result<&'a str> {
        let sep = separator.unwrap_or("");
        let needed = UUID_WORD_COUNT * 8 + (UUID_WORD_COUNT - 1) * sep.len();
        if buf.len() < needed {
            return Err(Error::BufferTooSmall);
        }

        let mut offset = 0;
        for (i, word) in self.words.iter().enumerate() {
            if i != 0 {
                buf[offset..offset + sep.len()].copy_from_slice(sep.as_bytes());
                offset += sep.len();
            }
            hex_str(&word.to_be_bytes(), &mut buf[offset..offset + 8]);
            offset += 8;
        }

        // Note(unwrap): hex digits and `separator` are valid UTF-8.
        Ok(core::str::from_utf8(&buf[..offset]).unwrap())
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}{:08x}", self.words[0], self.words[1])
    }
}

/// Hex-encode `src` into `dst`, which must hold exactly two digits per byte.
pub(crate) fn hex_str<'a>(src: &[u8], dst: &'a mut [u8]) -> &'a str {
    // Note(unwrap): cannot fail, `dst` is sized to two digits per byte.
    hex::encode_to_slice(src, dst).unwrap();
    // Note(unwrap): just written as ASCII hex digits.
    core::str::from_utf8(dst).unwrap()
}

/// Fuse reader returning fixed words, standing in for the OCOTP in tests.
#[cfg(test)]
pub(crate) struct FixedFuses(pub [u32; UUID_WORD_COUNT]);

#[cfg(test)]
impl FuseReader for FixedFuses {
    fn read_words(&mut self) -> [u32; UUID_WORD_COUNT] {
        self.0
    }
}

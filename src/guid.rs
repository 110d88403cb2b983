//! Manufacturer and vendor GUIDs derived from the device UUID.
//!
//! The manufacturer GUID is the UUID byte sequence under the label the
//! manufacturing records use. The vendor GUID namespaces those bytes with a
//! 16-bit SoC architecture identifier, so identical wafer coordinates on
//! different chip families never collide.

use core::fmt;

use crate::uuid::{FuseReader, UUID_BYTE_LENGTH, Uuid, hex_str};
use crate::{Error, Result};

/// SoC architecture identifier of the RT1061/RT1062/RT1064 family.
pub const SOC_ARCH_ID: u16 = 0x0005;

/// Device UUID under its manufacturing-records label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MfgGuid([u8; MfgGuid::LENGTH]);

impl MfgGuid {
    /// Length in bytes.
    pub const LENGTH: usize = UUID_BYTE_LENGTH;

    /// Buffer capacity needed for the full hex rendering.
    pub const FORMAT_LENGTH: usize = 2 * Self::LENGTH;

    /// Read the manufacturer GUID from the OCOTP fuse bank.
    pub fn read() -> Self {
        Self::from_uuid(&Uuid::read())
    }

    /// Read the manufacturer GUID through a caller-supplied fuse reader.
    pub fn read_from(reader: &mut impl FuseReader) -> Self {
        Self::from_uuid(&Uuid::read_from(reader))
    }

    /// Derive the manufacturer GUID from an already captured UUID.
    pub fn from_uuid(uuid: &Uuid) -> Self {
        Self(uuid.to_bytes())
    }

    /// The GUID bytes.
    pub const fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Render as hex into `buf`.
    ///
    /// Writes exactly [`FORMAT_LENGTH`](Self::FORMAT_LENGTH) lowercase,
    /// zero-padded digits. Fails with [`Error::BufferTooSmall`] if `buf` is
    /// shorter than that; the output is never silently truncated.
    pub fn format_into<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str> {
        if buf.len() < Self::FORMAT_LENGTH {
            return Err(Error::BufferTooSmall);
        }
        Ok(hex_str(&self.0, &mut buf[..Self::FORMAT_LENGTH]))
    }
}

impl fmt::Display for MfgGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::FORMAT_LENGTH];
        f.write_str(hex_str(&self.0, &mut buf))
    }
}

/// Architecture-namespaced device GUID.
///
/// Layout: the architecture ID big-endian, zero padding, then the UUID
/// bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VendorGuid([u8; VendorGuid::LENGTH]);

impl VendorGuid {
    /// Length in bytes.
    pub const LENGTH: usize = 16;

    /// Buffer capacity needed for the full hex rendering.
    pub const FORMAT_LENGTH: usize = 2 * Self::LENGTH;

    const PAD_LENGTH: usize = Self::LENGTH - (size_of::<u16>() + UUID_BYTE_LENGTH);

    /// Read the vendor GUID from the OCOTP fuse bank.
    pub fn read() -> Self {
        Self::from_uuid(&Uuid::read())
    }

    /// Read the vendor GUID through a caller-supplied fuse reader.
    pub fn read_from(reader: &mut impl FuseReader) -> Self {
        Self::from_uuid(&Uuid::read_from(reader))
    }

    /// Derive the vendor GUID from an already captured UUID, namespaced by
    /// [`SOC_ARCH_ID`].
    pub fn from_uuid(uuid: &Uuid) -> Self {
        Self::with_arch_id(uuid, SOC_ARCH_ID)
    }

    /// Derive the vendor GUID with an explicit architecture identifier.
    pub fn with_arch_id(uuid: &Uuid, arch_id: u16) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[..2].copy_from_slice(&arch_id.to_be_bytes());
        bytes[2 + Self::PAD_LENGTH..].copy_from_slice(&uuid.to_bytes());
        Self(bytes)
    }

    /// The GUID bytes.
    pub const fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Render as hex into `buf`, truncating from the most-significant side.
    ///
    /// An even capacity is rounded down by one, keeping byte-pair alignment
    /// and leaving the last byte free for a caller-appended NUL. Whatever
    /// capacity remains receives the hex of the **last** `capacity / 2`
    /// GUID bytes: a short buffer holds the tail of the identifier rather
    /// than its head.
    pub fn format_into<'a>(&self, buf: &'a mut [u8]) -> &'a str {
        let capacity = if buf.len() % 2 == 0 {
            buf.len().saturating_sub(1)
        } else {
            buf.len()
        };
        let shown = (capacity / 2).min(Self::LENGTH);
        hex_str(&self.0[Self::LENGTH - shown..], &mut buf[..2 * shown])
    }
}

impl fmt::Display for VendorGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::FORMAT_LENGTH];
        f.write_str(hex_str(&self.0, &mut buf))
    }
}

// The fixed layout must leave room for the architecture ID and the UUID.
const _: () = assert!(VendorGuid::LENGTH >= size_of::<u16>() + UUID_BYTE_LENGTH);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::FixedFuses;

    const WORDS: [u32; 2] = [0x1234_5678, 0x9abc_def0];
    const UUID_BYTES: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];

    #[test]
    fn mfg_guid_matches_uuid_bytes() {
        let uuid = Uuid::from_words(WORDS);
        assert_eq!(*MfgGuid::from_uuid(&uuid).as_bytes(), uuid.to_bytes());
    }

    #[test]
    fn mfg_guid_format_is_full_lowercase_hex() {
        let guid = MfgGuid::read_from(&mut FixedFuses(WORDS));

        let mut buf = [0u8; MfgGuid::FORMAT_LENGTH];
        assert_eq!(guid.format_into(&mut buf).unwrap(), "123456789abcdef0");

        // A larger buffer still yields exactly sixteen digits.
        let mut buf = [0u8; 32];
        assert_eq!(guid.format_into(&mut buf).unwrap().len(), 16);
    }

    #[test]
    fn mfg_guid_format_rejects_short_buffer() {
        let guid = MfgGuid::read_from(&mut FixedFuses(WORDS));
        let mut buf = [0u8; MfgGuid::FORMAT_LENGTH - 1];
        assert_eq!(guid.format_into(&mut buf), Err(Error::BufferTooSmall));
    }

    #[test]
    fn mfg_guid_hex_round_trips() {
        let guid = MfgGuid::read_from(&mut FixedFuses(WORDS));

        let mut buf = [0u8; MfgGuid::FORMAT_LENGTH];
        let text = guid.format_into(&mut buf).unwrap();

        let mut decoded = [0u8; MfgGuid::LENGTH];
        hex::decode_to_slice(text, &mut decoded).unwrap();
        assert_eq!(decoded, *guid.as_bytes());
    }

    #[test]
    fn vendor_guid_layout() {
        let guid = VendorGuid::from_uuid(&Uuid::from_words(WORDS));
        let bytes = guid.as_bytes();

        assert_eq!(bytes[..2], SOC_ARCH_ID.to_be_bytes());
        assert_eq!(bytes[2..8], [0; 6]);
        assert_eq!(bytes[8..], UUID_BYTES);
    }

    #[test]
    fn vendor_guid_explicit_arch_id() {
        let guid = VendorGuid::with_arch_id(&Uuid::from_words(WORDS), 0xbeef);
        assert_eq!(guid.as_bytes()[..2], [0xbe, 0xef]);
    }

    #[test]
    fn vendor_guid_format_full() {
        let guid = VendorGuid::read_from(&mut FixedFuses(WORDS));

        let mut buf = [0u8; VendorGuid::FORMAT_LENGTH + 1];
        assert_eq!(
            guid.format_into(&mut buf),
            "0005000000000000123456789abcdef0"
        );
    }

    #[test]
    fn vendor_guid_format_truncates_most_significant_side() {
        let guid = VendorGuid::read_from(&mut FixedFuses(WORDS));

        // Capacity 5 shows only the last two GUID bytes.
        let mut buf = [0u8; 5];
        assert_eq!(guid.format_into(&mut buf), "def0");

        let mut buf = [0u8; 9];
        assert_eq!(guid.format_into(&mut buf), "9abcdef0");
    }

    #[test]
    fn vendor_guid_format_even_capacity_rounds_down() {
        let guid = VendorGuid::read_from(&mut FixedFuses(WORDS));

        let mut even = [0u8; 6];
        let mut odd = [0u8; 5];
        assert_eq!(guid.format_into(&mut even), "def0");
        assert_eq!(guid.format_into(&mut even), guid.format_into(&mut odd));
    }

    #[test]
    fn vendor_guid_format_tiny_buffers() {
        let guid = VendorGuid::read_from(&mut FixedFuses(WORDS));

        for len in 0..3 {
            let mut buf = [0u8; 2];
            assert_eq!(guid.format_into(&mut buf[..len]), "");
        }

        let mut buf = [0u8; 3];
        assert_eq!(guid.format_into(&mut buf), "f0");
    }

    #[test]
    fn display_shows_full_guids() {
        let mut fuses = FixedFuses(WORDS);
        assert_eq!(
            format!("{}", MfgGuid::read_from(&mut fuses)),
            "123456789abcdef0"
        );
        assert_eq!(
            format!("{}", VendorGuid::read_from(&mut fuses)),
            "0005000000000000123456789abcdef0"
        );
    }
}

#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod guid;
pub mod ocotp;
pub mod uuid;

#[cfg(not(any(feature = "imxrt1061", feature = "imxrt1062", feature = "imxrt1064")))]
compile_error!(
    "No chip feature selected. Enable one of the following features: imxrt1061, imxrt1062, imxrt1064"
);

pub use guid::{MfgGuid, SOC_ARCH_ID, VendorGuid};
pub use uuid::{FuseReader, UUID_BYTE_LENGTH, UUID_WORD_COUNT, Uuid};

/// Board identity error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The destination buffer cannot hold the formatted output.
    BufferTooSmall,
}

/// Shorthand for the result of board identity operations.
pub type Result<T> = core::result::Result<T, Error>;

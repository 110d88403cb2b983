//! On-Chip One-Time-Programmable (OCOTP) fuse controller.
//!
//! The UUID fuses are mirrored into the OCOTP shadow registers at power-on
//! reset, so reading them is a plain register load with no side effects and
//! no failure mode.

use imxrt_ral as ral;

use crate::uuid::{FuseReader, UUID_WORD_COUNT};

/// Fuse reader backed by the OCOTP shadow registers.
///
/// `HW_OCOTP_CFG1` carries UNIQUE_ID\[63:32\]: the die X/Y coordinates, the
/// wafer number and the top bits of the encoded lot ID. `HW_OCOTP_CFG0`
/// carries UNIQUE_ID\[31:0\], the rest of the lot ID.
pub struct Ocotp;

impl FuseReader for Ocotp {
    fn read_words(&mut self) -> [u32; UUID_WORD_COUNT] {
        // Shadow registers are read-only here; aliasing the instance is
        // harmless.
        let ocotp = unsafe { ral::ocotp::OCOTP::instance() };

        let words = [
            ral::read_reg!(ral::ocotp, ocotp, CFG1),
            ral::read_reg!(ral::ocotp, ocotp, CFG0),
        ];

        trace!("OCOTP unique id words: {:08x} {:08x}", words[0], words[1]);

        words
    }
}

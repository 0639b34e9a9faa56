//! Allocator-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while configuring or growing a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// `slot_size` was zero — a slot must hold at least one byte.
    ZeroSlotSize,
    /// `slot_size` exceeds the usable payload of a single block, so no
    /// block could ever hold a slot.
    SlotExceedsBlock {
        /// The configured slot size in bytes.
        slot_size: u32,
        /// Usable payload bytes per block after header overhead.
        usable: u32,
    },
    /// The underlying memory source could not supply a new block.
    ///
    /// The allocator's observable state is unchanged when this is returned.
    BlockUnavailable {
        /// Payload bytes requested for the new block.
        bytes: usize,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSlotSize => {
                write!(f, "slot size must be non-zero")
            }
            Self::SlotExceedsBlock { slot_size, usable } => {
                write!(
                    f,
                    "slot size {slot_size} exceeds usable block payload of {usable} bytes"
                )
            }
            Self::BlockUnavailable { bytes } => {
                write!(f, "memory source could not supply a {bytes}-byte block")
            }
        }
    }
}

impl Error for ChainError {}

//! Chain configuration parameters.

use crate::error::ChainError;
use crate::source::AcquireMode;

/// Bookkeeping overhead accounted per block, in bytes.
///
/// Each block's usable slot payload is `block_size - BLOCK_HEADER_BYTES`;
/// [`memory_bytes`](crate::ChainAllocator::memory_bytes) reports the full
/// `block_size` per block including this overhead. Fixed policy, not
/// configurable.
pub const BLOCK_HEADER_BYTES: u32 = 16;

/// Configuration for a [`ChainAllocator`](crate::ChainAllocator).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    /// Size of each individual slot in bytes. Must be non-zero and no
    /// larger than a block's usable payload.
    pub slot_size: u32,

    /// Bytes accounted per block, header overhead included.
    ///
    /// Default: 32KB. Naturally much larger than `slot_size`; a block
    /// holds `(block_size - BLOCK_HEADER_BYTES) / slot_size` slots.
    pub block_size: u32,

    /// Which acquisition path obtains and releases block memory.
    ///
    /// Selects between amortised and exact-fit reservation; semantics of
    /// the allocator are identical in both modes.
    pub mode: AcquireMode,
}

impl ChainConfig {
    /// Default block size: 32KB.
    pub const DEFAULT_BLOCK_SIZE: u32 = 32 * 1024;

    /// Create a config for the given slot size, with the default block
    /// size and the [`AcquireMode::Standard`] acquisition path.
    pub fn new(slot_size: u32) -> Self {
        Self {
            slot_size,
            block_size: Self::DEFAULT_BLOCK_SIZE,
            mode: AcquireMode::Standard,
        }
    }

    /// Usable payload bytes per block after header overhead.
    ///
    /// Saturates to zero when `block_size` is smaller than the header,
    /// which [`validate`](Self::validate) then rejects.
    pub fn usable_block_bytes(&self) -> u32 {
        self.block_size.saturating_sub(BLOCK_HEADER_BYTES)
    }

    /// Number of slots that fit in one block's payload.
    pub fn slots_per_block(&self) -> u32 {
        if self.slot_size == 0 {
            return 0;
        }
        self.usable_block_bytes() / self.slot_size
    }

    /// Check that a block can hold at least one slot.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.slot_size == 0 {
            return Err(ChainError::ZeroSlotSize);
        }
        if self.slot_size > self.usable_block_bytes() {
            return Err(ChainError::SlotExceedsBlock {
                slot_size: self.slot_size,
                usable: self.usable_block_bytes(),
            });
        }
        Ok(())
    }
}

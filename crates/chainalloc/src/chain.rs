//! The block-chain allocator.
//!
//! [`ChainAllocator`] owns a chain of equal-size blocks, newest at the
//! tail. [`ChainAllocator::alloc`] bumps the tail block's occupancy and
//! grows the chain by one block when the tail is full;
//! [`ChainAllocator::trim`] releases the most recent slot and frees the
//! tail block when it empties. Every block except possibly the tail is
//! full at all times.

use smallvec::SmallVec;

use crate::block::Block;
use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::handle::SlotHandle;
use crate::source::AcquireMode;

/// Fixed-size slot allocator over a chain of equal-size blocks, released
/// strictly last-in-first-out.
///
/// There are few checks here in release builds: trim/last preconditions
/// and handle liveness are the caller's contract, asserted only in debug
/// builds (see the crate docs).
///
/// # Example
///
/// ```rust
/// use chainalloc::{ChainAllocator, ChainConfig};
///
/// let mut chain = ChainAllocator::new(ChainConfig::new(64))?;
/// let h = chain.alloc()?;
/// chain.slot_mut(h)[0] = 0xFF;
/// assert_eq!(chain.last(), h);
/// chain.trim();
/// assert!(chain.is_empty());
/// # Ok::<(), chainalloc::ChainError>(())
/// ```
pub struct ChainAllocator {
    /// Owned chain, oldest block first. Release is LIFO, so only the
    /// tail ever changes occupancy and live block indices are stable.
    blocks: SmallVec<[Block; 4]>,
    /// Total live slots across the chain.
    live: u64,
    slot_size: u32,
    block_size: u32,
    slots_per_block: u32,
    mode: AcquireMode,
}

impl ChainAllocator {
    /// Create an empty chain for the given configuration.
    ///
    /// Fails if the configuration cannot fit a single slot in a block;
    /// no memory is acquired until the first [`alloc`](Self::alloc).
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        config.validate()?;
        Ok(Self {
            blocks: SmallVec::new(),
            live: 0,
            slot_size: config.slot_size,
            block_size: config.block_size,
            slots_per_block: config.slots_per_block(),
            mode: config.mode,
        })
    }

    /// Reserve the next slot, growing the chain by one block if the tail
    /// is full (or no block exists yet).
    ///
    /// The returned slot is zero-filled. On
    /// [`ChainError::BlockUnavailable`] the chain is left exactly as it
    /// was — the new block is acquired before any counter moves.
    pub fn alloc(&mut self) -> Result<SlotHandle, ChainError> {
        let needs_block = match self.blocks.last() {
            Some(tail) => tail.is_full(self.slots_per_block),
            None => true,
        };
        if needs_block {
            let block = Block::acquire(self.mode, self.slots_per_block, self.slot_size)?;
            self.blocks.push(block);
        }

        let index = self.blocks.len() - 1;
        let offset = self.blocks[index].push_slot(self.slot_size);
        self.live += 1;
        Ok(SlotHandle::new(index as u32, offset))
    }

    /// Location of the most recently allocated live slot.
    ///
    /// Contract: the chain must not be empty. Debug builds assert;
    /// release builds panic when the contract is violated.
    pub fn last(&self) -> SlotHandle {
        debug_assert!(self.live > 0, "last() on an empty chain");
        let index = self.blocks.len() - 1;
        let occupancy = self.blocks[index].occupancy();
        SlotHandle::new(index as u32, (occupancy - 1) * self.slot_size)
    }

    /// Shared view of the most recently allocated slot.
    ///
    /// Same contract as [`last`](Self::last).
    pub fn last_slot(&self) -> &[u8] {
        self.slot(self.last())
    }

    /// Mutable view of the most recently allocated slot.
    ///
    /// Same contract as [`last`](Self::last).
    pub fn last_slot_mut(&mut self) -> &mut [u8] {
        let handle = self.last();
        self.slot_mut(handle)
    }

    /// Release exactly the most recently allocated slot.
    ///
    /// Frees the tail block entirely once its occupancy reaches zero.
    /// Contract: callers must not trim more times than they have
    /// allocated. Debug builds assert; release builds panic.
    pub fn trim(&mut self) {
        debug_assert!(self.live > 0, "trim on an empty chain");
        let index = self.blocks.len() - 1;
        self.live -= 1;
        if self.blocks[index].pop_slot() == 0 {
            // Tail block emptied: unlink it and hand its memory back.
            self.blocks.pop();
        }
    }

    /// Shared view of the slot at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if the handle's slot has been trimmed away (the block index
    /// no longer exists, or the offset is past the block's payload).
    pub fn slot(&self, handle: SlotHandle) -> &[u8] {
        self.blocks[handle.block as usize].slot(handle.offset, self.slot_size)
    }

    /// Mutable view of the slot at `handle`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`slot`](Self::slot).
    pub fn slot_mut(&mut self, handle: SlotHandle) -> &mut [u8] {
        self.blocks[handle.block as usize].slot_mut(handle.offset, self.slot_size)
    }

    /// Release every live slot and every block, restoring the empty state.
    ///
    /// Valid (and a no-op) on an already-empty chain.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.live = 0;
    }

    /// Total live slots across the chain.
    pub fn live_count(&self) -> u64 {
        self.live
    }

    /// Whether no slot is currently live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of blocks currently in the chain.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Slots that fit in one block's payload.
    pub fn slots_per_block(&self) -> u32 {
        self.slots_per_block
    }

    /// Bytes per individual slot.
    pub fn slot_size(&self) -> u32 {
        self.slot_size
    }

    /// Total bytes currently reserved from the memory source, per-block
    /// header overhead included: `block_count × block_size`.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.len() * self.block_size as usize
    }

    /// One-call accounting snapshot.
    pub fn stats(&self) -> ChainStats {
        ChainStats {
            live: self.live,
            blocks: self.blocks.len(),
            memory_bytes: self.memory_bytes(),
        }
    }
}

/// Accounting snapshot of a [`ChainAllocator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainStats {
    /// Live slots across the chain.
    pub live: u64,
    /// Blocks currently in the chain.
    pub blocks: usize,
    /// Bytes reserved from the memory source, header overhead included.
    pub memory_bytes: usize,
}

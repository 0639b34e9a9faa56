//! Fixed-capacity blocks of contiguous slot storage.

use crate::error::ChainError;
use crate::source::{self, AcquireMode};

/// One block in the chain: a contiguous payload buffer plus an occupancy
/// counter.
///
/// Slots are packed from the start of the payload with no per-slot header;
/// slot `i` lives at byte offset `i * slot_size`. The occupancy counter,
/// not a free list, governs the next slot position.
pub(crate) struct Block {
    /// Payload storage, `slots_per_block * slot_size` bytes.
    data: Box<[u8]>,
    /// Number of currently-live slots, counted from the payload start.
    occupancy: u32,
}

impl Block {
    /// Acquire a fresh, empty block with room for `slots` slots of
    /// `slot_size` bytes each.
    pub(crate) fn acquire(
        mode: AcquireMode,
        slots: u32,
        slot_size: u32,
    ) -> Result<Self, ChainError> {
        let bytes = slots as usize * slot_size as usize;
        Ok(Self {
            data: source::acquire(mode, bytes)?,
            occupancy: 0,
        })
    }

    /// Occupy the next free slot, returning its byte offset.
    ///
    /// The slot's bytes are zeroed; previous occupants of a vacated
    /// position do not leak through. Caller guarantees the block is not
    /// full.
    pub(crate) fn push_slot(&mut self, slot_size: u32) -> u32 {
        let offset = self.occupancy * slot_size;
        self.occupancy += 1;
        let start = offset as usize;
        self.data[start..start + slot_size as usize].fill(0);
        offset
    }

    /// Vacate the most recently occupied slot.
    ///
    /// Caller guarantees the block is not empty. Returns the new
    /// occupancy, zero meaning the block should be released.
    pub(crate) fn pop_slot(&mut self) -> u32 {
        debug_assert!(self.occupancy > 0, "pop_slot on an empty block");
        self.occupancy -= 1;
        self.occupancy
    }

    /// Shared view of the slot at `offset`.
    pub(crate) fn slot(&self, offset: u32, slot_size: u32) -> &[u8] {
        let start = offset as usize;
        &self.data[start..start + slot_size as usize]
    }

    /// Mutable view of the slot at `offset`.
    pub(crate) fn slot_mut(&mut self, offset: u32, slot_size: u32) -> &mut [u8] {
        let start = offset as usize;
        &mut self.data[start..start + slot_size as usize]
    }

    /// Number of currently-live slots in this block.
    pub(crate) fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Whether every slot position is occupied.
    pub(crate) fn is_full(&self, slots_per_block: u32) -> bool {
        self.occupancy == slots_per_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(slots: u32, slot_size: u32) -> Block {
        Block::acquire(AcquireMode::Standard, slots, slot_size).unwrap()
    }

    #[test]
    fn slots_pack_from_the_start() {
        let mut b = block(4, 16);
        assert_eq!(b.push_slot(16), 0);
        assert_eq!(b.push_slot(16), 16);
        assert_eq!(b.push_slot(16), 32);
        assert_eq!(b.occupancy(), 3);
    }

    #[test]
    fn pop_vacates_the_last_position() {
        let mut b = block(4, 16);
        b.push_slot(16);
        b.push_slot(16);
        assert_eq!(b.pop_slot(), 1);
        // The vacated position is handed out again.
        assert_eq!(b.push_slot(16), 16);
    }

    #[test]
    fn full_at_capacity() {
        let mut b = block(2, 8);
        b.push_slot(8);
        assert!(!b.is_full(2));
        b.push_slot(8);
        assert!(b.is_full(2));
    }

    #[test]
    fn reused_slot_is_zeroed() {
        let mut b = block(2, 8);
        let off = b.push_slot(8);
        b.slot_mut(off, 8).fill(0xAB);
        b.pop_slot();
        let off2 = b.push_slot(8);
        assert_eq!(off, off2);
        assert!(b.slot(off2, 8).iter().all(|&v| v == 0));
    }

    #[test]
    fn slot_views_are_slot_sized() {
        let mut b = block(3, 24);
        let off = b.push_slot(24);
        assert_eq!(b.slot(off, 24).len(), 24);
        assert_eq!(b.slot_mut(off, 24).len(), 24);
    }
}

//! Block memory acquisition.
//!
//! Blocks are obtained through one of two reservation paths selected at
//! configuration time. Both paths are fallible: exhaustion of the
//! underlying memory source surfaces as
//! [`ChainError::BlockUnavailable`] instead of aborting the process.

use crate::error::ChainError;

/// Which path obtains and releases a block's raw memory.
///
/// The mode changes only how memory is reserved, never the allocator's
/// semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AcquireMode {
    /// Amortised reservation. The global allocator may round the request
    /// up to a size class; suited to many small-to-medium blocks.
    #[default]
    Standard,
    /// Exact-fit reservation. Avoids size-class rounding, which matters
    /// once blocks reach tens of megabytes.
    Huge,
    /// Reports exhaustion on every acquisition without touching the
    /// memory source. Compiled for unit tests only, so the failure path
    /// of [`alloc`](crate::ChainAllocator::alloc) can be exercised
    /// deterministically.
    #[cfg(test)]
    Exhausted,
}

/// Reserve a zero-initialised buffer of `bytes` for a new block.
///
/// Returns [`ChainError::BlockUnavailable`] when the reservation fails,
/// leaving no allocation behind. Releasing a block is dropping the
/// returned buffer.
pub(crate) fn acquire(mode: AcquireMode, bytes: usize) -> Result<Box<[u8]>, ChainError> {
    let mut buf: Vec<u8> = Vec::new();
    let reserved = match mode {
        AcquireMode::Standard => buf.try_reserve(bytes),
        AcquireMode::Huge => buf.try_reserve_exact(bytes),
        #[cfg(test)]
        AcquireMode::Exhausted => return Err(ChainError::BlockUnavailable { bytes }),
    };
    reserved.map_err(|_| ChainError::BlockUnavailable { bytes })?;
    buf.resize(bytes, 0);
    Ok(buf.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_acquire_is_zeroed_and_sized() {
        let buf = acquire(AcquireMode::Standard, 1024).unwrap();
        assert_eq!(buf.len(), 1024);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn huge_acquire_is_zeroed_and_sized() {
        let buf = acquire(AcquireMode::Huge, 1024).unwrap();
        assert_eq!(buf.len(), 1024);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn exhausted_acquire_reports_the_requested_bytes() {
        let result = acquire(AcquireMode::Exhausted, 512);
        assert_eq!(result.err(), Some(ChainError::BlockUnavailable { bytes: 512 }));
    }

    #[test]
    fn zero_byte_acquire_is_valid() {
        let buf = acquire(AcquireMode::Standard, 0).unwrap();
        assert!(buf.is_empty());
    }
}

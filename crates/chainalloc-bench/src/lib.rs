//! Benchmark profiles for the chainalloc allocator.
//!
//! Provides pre-built [`ChainConfig`] profiles shared across the bench
//! targets:
//!
//! - [`record_profile`]: 48-byte slots in 32KB blocks, the tuple-storage shape
//! - [`huge_block_profile`]: 64-byte slots in 8MB blocks on the exact-fit path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chainalloc::{AcquireMode, ChainConfig};

/// 48-byte slots in 32KB blocks: many small records per block.
pub fn record_profile() -> ChainConfig {
    ChainConfig {
        slot_size: 48,
        block_size: ChainConfig::DEFAULT_BLOCK_SIZE,
        mode: AcquireMode::Standard,
    }
}

/// 64-byte slots in 8MB blocks, reserved through the exact-fit path.
pub fn huge_block_profile() -> ChainConfig {
    ChainConfig {
        slot_size: 64,
        block_size: 8 * 1024 * 1024,
        mode: AcquireMode::Huge,
    }
}

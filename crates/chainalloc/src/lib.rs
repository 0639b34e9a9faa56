//! Fixed-size slot allocation over a chain of equal-size blocks.
//!
//! `chainalloc` hands out many same-size allocations ("slots") without
//! per-allocation heap overhead, for callers that release strictly in
//! last-in-first-out order: temporary record storage, undo buffers,
//! scratch arenas inside a larger execution engine.
//!
//! # Architecture
//!
//! ```text
//! ChainAllocator (orchestrator)
//! ├── Block[] (owned chain, newest at the tail)
//! │   └── zero-initialised byte buffer, slots_per_block × slot_size
//! ├── AcquireMode (Standard / Huge block acquisition path)
//! └── live / block / byte accounting
//! ```
//!
//! Allocation bumps the tail block's occupancy, growing the chain by one
//! block when the tail is full. [`ChainAllocator::trim`] releases the most
//! recent slot and frees the tail block once its occupancy reaches zero.
//! Slots are addressed through copyable [`SlotHandle`]s resolved in O(1);
//! because release is strictly LIFO, a live block's position in the chain
//! never changes and handles stay valid until their slot is trimmed.
//!
//! # Caller contract
//!
//! The allocator does not track which handles are outstanding. Trimming
//! more times than allocating, calling [`ChainAllocator::last`] on an empty
//! chain, or resolving a handle after its slot was trimmed are contract
//! violations: debug builds assert, release builds panic on slice bounds at
//! the latest. There is no internal locking — share across threads only
//! behind external synchronisation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod block;
pub mod chain;
pub mod config;
pub mod error;
pub mod handle;
pub mod source;

// Public re-exports for the primary API surface.
pub use chain::{ChainAllocator, ChainStats};
pub use config::ChainConfig;
pub use error::ChainError;
pub use handle::SlotHandle;
pub use source::AcquireMode;

//! Buddy page-frame allocator module
//!
//! This module provides a complete buddy system over a dense frame table:
//! - Address-ordered intrusive free lists, one per order
//! - Split/merge primitives and iterative coalescing
//! - Single-frame reservation out of larger free blocks
//! - Optional statistics and failure reporting

pub mod allocator;
pub mod frame;
pub mod free_area;
#[cfg(feature = "tracking")]
pub mod stats;

pub use allocator::BuddyFrameAllocator;
pub use frame::{frames_per_block, FrameDescriptor, MAX_ORDER, ORDER_COUNT};
pub use free_area::{FreeArea, FreeAreaIter};
#[cfg(feature = "tracking")]
pub use stats::BuddyStats;

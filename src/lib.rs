//! Buddy-system page-frame allocator.
//!
//! This crate manages a fixed pool of physical page frames and serves
//! requests for power-of-two-sized contiguous frame ranges, featuring:
//! - Per-order free lists with automatic split and coalesce
//! - Reservation of individual frames out of larger free blocks
//! - Intrusive, index-linked bookkeeping inside caller-owned descriptors
//! - A spin-locked front-end for hosts that share one allocator
//!
//! The allocator never owns frame storage: the host hands it a dense table
//! of [`FrameDescriptor`]s at construction and the allocator only ever
//! manipulates free-list membership of frames in that table.

#![no_std]

extern crate alloc;

// Logging support - conditionally import log crate
#[cfg(feature = "log")]
extern crate log;

// Stub macros when log is disabled - these become no-ops
#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! error {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
macro_rules! info {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// The error type used for allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// Invalid request parameter (e.g. an order above [`MAX_ORDER`]).
    InvalidParam,
    /// No free block of the requested order or above exists.
    NoMemory,
}

/// A [`Result`] type with [`AllocError`] as the error type.
pub type AllocResult<T = ()> = Result<T, AllocError>;

/// Page-frame allocation strategy.
///
/// The host selects an implementation at startup and injects it wherever
/// frames are needed; [`name`](FrameAllocator::name) identifies the
/// algorithm when the choice is driven by configuration.
pub trait FrameAllocator {
    /// Allocate a naturally aligned block of `1 << order` contiguous frames.
    ///
    /// Returns the index of the first frame of the block.
    fn alloc_block(&mut self, order: usize) -> AllocResult<usize>;

    /// Release a block previously obtained from
    /// [`alloc_block`](FrameAllocator::alloc_block) at the same order.
    ///
    /// Misuse (misaligned start, out-of-range order, double free) is fatal.
    fn free_block(&mut self, pfn: usize, order: usize);

    /// Withdraw one specific frame from the free pool so it can no longer be
    /// allocated. Returns `false` when the frame is not currently free.
    fn reserve_frame(&mut self, pfn: usize) -> bool;

    /// Whether a free block of exactly this order starts at `pfn`.
    fn is_block_free(&self, pfn: usize, order: usize) -> bool;

    /// Total number of frames under management.
    fn total_frames(&self) -> usize;

    /// Number of frames currently free.
    fn free_frames(&self) -> usize;

    /// Log a human-readable listing of the free lists.
    fn dump_state(&self);

    /// Short identifier of the algorithm.
    fn name(&self) -> &'static str;
}

pub mod buddy;
#[cfg(feature = "tracking")]
pub use buddy::BuddyStats;
pub use buddy::{frames_per_block, BuddyFrameAllocator, FrameDescriptor, MAX_ORDER, ORDER_COUNT};

pub mod locked;
pub use locked::LockedFrameAllocator;

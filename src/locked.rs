//! Spin-locked front-end for shared use.
//!
//! The buddy allocator itself is single-threaded by contract: every caller
//! must serialize access around mutating operations. Hosts that share one
//! allocator across cores or interrupt contexts wrap it here instead. A
//! single lock guards the whole free-area table, since its invariants
//! (ordered lists, exclusive membership, buddy-pair atomicity across
//! orders) do not decompose into finer locks.

use kspin::SpinNoIrq;

use crate::{AllocResult, BuddyFrameAllocator, FrameDescriptor};

/// A [`BuddyFrameAllocator`] behind a [`SpinNoIrq`], usable through `&self`.
pub struct LockedFrameAllocator<'a> {
    inner: SpinNoIrq<BuddyFrameAllocator<'a>>,
}

impl<'a> LockedFrameAllocator<'a> {
    /// Build the allocator over `frames`; see [`BuddyFrameAllocator::new`].
    pub fn new(frames: &'a mut [FrameDescriptor]) -> Self {
        Self {
            inner: SpinNoIrq::new(BuddyFrameAllocator::new(frames)),
        }
    }

    /// Allocate a block of `1 << order` contiguous frames.
    pub fn alloc_block(&self, order: usize) -> AllocResult<usize> {
        self.inner.lock().alloc_block(order)
    }

    /// Release a block previously obtained at the same order.
    pub fn free_block(&self, pfn: usize, order: usize) {
        self.inner.lock().free_block(pfn, order)
    }

    /// Withdraw one specific frame from the free pool.
    pub fn reserve_frame(&self, pfn: usize) -> bool {
        self.inner.lock().reserve_frame(pfn)
    }

    /// Whether a free block of exactly this order starts at `pfn`.
    pub fn is_block_free(&self, pfn: usize, order: usize) -> bool {
        self.inner.lock().is_block_free(pfn, order)
    }

    /// Total number of frames under management.
    pub fn total_frames(&self) -> usize {
        self.inner.lock().total_frames()
    }

    /// Number of frames currently free.
    pub fn free_frames(&self) -> usize {
        self.inner.lock().free_frames()
    }

    /// Log a listing of the free lists.
    pub fn dump_state(&self) {
        self.inner.lock().dump_state()
    }

    /// Snapshot of the free-area table.
    #[cfg(feature = "tracking")]
    pub fn stats(&self) -> crate::BuddyStats {
        self.inner.lock().stats()
    }
}

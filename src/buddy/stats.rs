//! Statistics and debugging for the buddy allocator
//!
//! Provides free-frame accounting and allocation-failure reporting.

use super::frame::{frames_per_block, ORDER_COUNT};

/// Snapshot of the free-area table.
#[derive(Debug, Clone, Copy)]
pub struct BuddyStats {
    pub total_frames: usize,
    pub free_frames: usize,
    pub used_frames: usize,
    pub free_blocks_by_order: [usize; ORDER_COUNT],
}

impl Default for BuddyStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BuddyStats {
    pub const fn new() -> Self {
        Self {
            total_frames: 0,
            free_frames: 0,
            used_frames: 0,
            free_blocks_by_order: [0; ORDER_COUNT],
        }
    }
}

/// Log the state of the free-area table after a failed allocation.
///
/// Standalone so the allocation path stays free of formatting logic.
#[allow(unused_variables)]
pub(crate) fn report_alloc_failure(order: usize, stats: &BuddyStats) {
    {
        #[cfg(feature = "log")]
        use log::error;
        let request_frames = frames_per_block(order);
        error!("========================================");
        error!(
            "buddy: request for order {} ({} frames) failed",
            order, request_frames
        );
        error!("  total frames: {}", stats.total_frames);
        error!("  free frames:  {}", stats.free_frames);
        error!("  used frames:  {}", stats.used_frames);
        error!("  free blocks by order:");
        for o in (0..ORDER_COUNT).rev() {
            let count = stats.free_blocks_by_order[o];
            let block_frames = frames_per_block(o);
            if count > 0 {
                error!(
                    "    [{:2}] {} blocks of {} frames",
                    o, count, block_frames
                );
            }
        }
        error!("========================================");
    }
}

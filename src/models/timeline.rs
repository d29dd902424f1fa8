//! Execution timeline (Gantt chart) model.
//!
//! Policies append execution intervals as they run; back-to-back
//! intervals of the same process are coalesced into one block, which
//! keeps the tick-driven policies (SRTF, preemptive priority) from
//! emitting one block per clock unit.

use serde::{Deserialize, Serialize};

use super::process::Ticks;

/// Number of distinct display color slots, shared with `Process`.
const PALETTE_SIZE: usize = 10;

/// One contiguous interval during which a single process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// 1-based id of the executing process.
    pub process_id: usize,
    /// First tick of the interval.
    pub start: Ticks,
    /// One past the last tick of the interval. Always > `start`.
    pub end: Ticks,
    /// Display palette slot. Cosmetic, irrelevant to correctness.
    pub color: usize,
}

impl TimelineBlock {
    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Ordered sequence of execution blocks for one simulation run.
///
/// Blocks are appended in non-decreasing start order and never overlap;
/// idle CPU time appears as gaps between blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<TimelineBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records execution of `process_id` over `[start, end)`.
    ///
    /// If the last block belongs to the same process and ends exactly
    /// at `start`, it is extended instead of pushing a new block.
    /// Empty intervals (`end <= start`) are ignored; every stored
    /// block has positive duration.
    pub fn record(&mut self, process_id: usize, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }

        if let Some(last) = self.blocks.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }

        self.blocks.push(TimelineBlock {
            process_id,
            start,
            end,
            color: process_id.saturating_sub(1) % PALETTE_SIZE,
        });
    }

    /// Discards all blocks.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// The recorded blocks, in execution order.
    pub fn blocks(&self) -> &[TimelineBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Latest end time across all blocks (0 when empty).
    pub fn makespan(&self) -> Ticks {
        self.blocks.iter().map(|b| b.end).max().unwrap_or(0)
    }

    /// Number of hand-offs between different processes.
    pub fn context_switches(&self) -> usize {
        self.blocks
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Whether no execution has been recorded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

//! Round-Robin: FIFO ready queue with a fixed time quantum.
//!
//! Each dispatch grants the front of the queue at most one quantum.
//! Processes that arrive while a slice executes are enqueued before the
//! preempted process re-enters at the tail, so a preempted job always
//! yields to work that became ready during its slice.

use std::collections::VecDeque;

use crate::models::{Process, Ticks, Timeline};

/// Runs Round-Robin with the given quantum. Returns the final clock.
///
/// The simulator maps a zero quantum to the default beforehand (see
/// `Algorithm::effective_quantum`); a zero passed directly is floored
/// to 1 so the loop always makes progress.
pub fn round_robin(procs: &mut [Process], timeline: &mut Timeline, quantum: Ticks) -> Ticks {
    let quantum = quantum.max(1);

    let total = procs.len();
    let mut completed = 0usize;
    let mut now: Ticks = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut queued = vec![false; total];

    // Seed with everything ready at t=0, in id order.
    for (i, p) in procs.iter().enumerate() {
        if p.arrival == 0 {
            queue.push_back(i);
            queued[i] = true;
        }
    }

    while completed < total {
        let i = match queue.pop_front() {
            Some(i) => i,
            None => {
                // Queue drained with work left: fast-forward to the
                // earliest future arrival and admit everything ready.
                let next = procs
                    .iter()
                    .filter(|p| p.remaining > 0 && p.arrival > now)
                    .map(|p| p.arrival)
                    .min();
                match next {
                    Some(arrival) => {
                        now = arrival;
                        enqueue_arrived(procs, now, &mut queue, &mut queued);
                        continue;
                    }
                    None => break,
                }
            }
        };

        let p = &mut procs[i];
        if p.started_at.is_none() {
            p.started_at = Some(now);
        }

        let slice = p.remaining.min(quantum);
        timeline.record(p.id, now, now + slice);
        now += slice;
        p.remaining -= slice;

        let finished = p.remaining == 0;
        if finished {
            p.completed_at = Some(now);
            queued[i] = false;
            completed += 1;
        }

        // New arrivals during the slice enter ahead of the preempted
        // process.
        enqueue_arrived(procs, now, &mut queue, &mut queued);

        if !finished {
            queue.push_back(i);
        }
    }
    now
}

/// Enqueues every unfinished, not-yet-queued process with
/// `arrival <= now`, in id order.
fn enqueue_arrived(
    procs: &[Process],
    now: Ticks,
    queue: &mut VecDeque<usize>,
    queued: &mut [bool],
) {
    for (j, p) in procs.iter().enumerate() {
        if p.arrival <= now && p.remaining > 0 && !queued[j] {
            queue.push_back(j);
            queued[j] = true;
        }
    }
}

//! Non-preemptive policies: FCFS, SJF, Priority.
//!
//! At each decision point one eligible process is selected and run to
//! completion as a single timeline block. When nothing has arrived
//! yet, the clock advances one idle tick and selection retries.

use crate::models::{Process, Ticks, Timeline};

/// First-Come, First-Served.
///
/// The execution order is fixed up front: processes sorted by arrival
/// time, lowest id first on ties. The table itself keeps insertion
/// order; only an index vector is sorted. Returns the final clock.
pub fn fcfs(procs: &mut [Process], timeline: &mut Timeline) -> Ticks {
    let mut order: Vec<usize> = (0..procs.len()).collect();
    order.sort_by_key(|&i| (procs[i].arrival, i));

    let mut now: Ticks = 0;
    for i in order {
        let p = &mut procs[i];
        if now < p.arrival {
            // CPU idles until the next process in the fixed order arrives.
            now = p.arrival;
        }
        p.started_at = Some(now);
        let end = now + p.burst;
        p.completed_at = Some(end);
        p.remaining = 0;
        timeline.record(p.id, now, end);
        now = end;
    }
    now
}

/// Shortest Job First: minimum burst among arrived processes.
pub fn sjf(procs: &mut [Process], timeline: &mut Timeline) -> Ticks {
    run_to_completion(procs, timeline, |p| p.burst)
}

/// Non-preemptive Priority: minimum priority value among arrived processes.
pub fn priority(procs: &mut [Process], timeline: &mut Timeline) -> Ticks {
    run_to_completion(procs, timeline, |p| Ticks::from(p.priority))
}

/// Shared selection loop for SJF and Priority.
///
/// `key` extracts the selection key; the lowest index breaks ties
/// (the index is folded into the comparison key, so selection is
/// always unambiguous).
fn run_to_completion(
    procs: &mut [Process],
    timeline: &mut Timeline,
    key: impl Fn(&Process) -> Ticks,
) -> Ticks {
    let total = procs.len();
    let mut completed = 0usize;
    let mut now: Ticks = 0;

    while completed < total {
        let pick = procs
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_complete() && p.arrival <= now)
            .min_by_key(|&(i, p)| (key(p), i))
            .map(|(i, _)| i);

        let i = match pick {
            Some(i) => i,
            None => {
                // All remaining arrivals are in the future: idle tick.
                now += 1;
                continue;
            }
        };

        let p = &mut procs[i];
        p.started_at = Some(now);
        let end = now + p.burst;
        p.completed_at = Some(end);
        p.remaining = 0;
        timeline.record(p.id, now, end);
        now = end;
        completed += 1;
    }
    now
}

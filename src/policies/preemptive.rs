//! Tick-driven preemptive policies: SRTF and Preemptive-Priority.
//!
//! The clock advances one unit at a time and the eligible set is
//! re-evaluated at every tick, so a newly-arrived process with a more
//! favorable key preempts immediately. Consecutive ticks of the same
//! process coalesce into one timeline block.

use crate::models::{Process, Ticks, Timeline};

/// Shortest Remaining Time First: preemptive on minimum remaining work.
pub fn srtf(procs: &mut [Process], timeline: &mut Timeline) -> Ticks {
    run_tick_dispatch(procs, timeline, |p| p.remaining)
}

/// Preemptive Priority: preemptive on minimum priority value.
pub fn preemptive_priority(procs: &mut [Process], timeline: &mut Timeline) -> Ticks {
    run_tick_dispatch(procs, timeline, |p| Ticks::from(p.priority))
}

/// Shared one-tick-at-a-time loop.
///
/// Each tick: pick the eligible process with the minimum `(key, index)`,
/// run it for exactly one unit, and complete it when its remaining time
/// hits zero. No eligible process means an idle tick.
fn run_tick_dispatch(
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
            .filter(|(_, p)| p.remaining > 0 && p.arrival <= now)
            .min_by_key(|&(i, p)| (key(p), i))
            .map(|(i, _)| i);

        let i = match pick {
            Some(i) => i,
            None => {
                now += 1;
                continue;
            }
        };

        let p = &mut procs[i];
        if p.started_at.is_none() {
            p.started_at = Some(now);
        }
        p.remaining -= 1;
        timeline.record(p.id, now, now + 1);
        now += 1;

        if p.remaining == 0 {
            // Completion is stamped with the post-increment clock.
            p.completed_at = Some(now);
            completed += 1;
        }
    }
    now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobTable;

    fn sample_table() -> JobTable {
        let mut table = JobTable::new();
        table.load_sample_set();
        table
    }

    fn block_ids(timeline: &Timeline) -> Vec<usize> {
        timeline.blocks().iter().map(|b| b.process_id).collect()
    }

    fn completions(procs: &[Process]) -> Vec<Ticks> {
        procs.iter().map(|p| p.completed_at.unwrap()).collect()
    }

    #[test]
    fn test_srtf_sample_set() {
        // P2 (burst 4) preempts P1 at t=1; remaining-time ties go to
        // the lower id, so P2 holds the CPU through t=5.
        let mut table = sample_table();
        let mut timeline = Timeline::new();
        let clock = srtf(table.processes_mut(), &mut timeline);

        assert_eq!(clock, 20);
        assert_eq!(completions(table.processes()), vec![15, 5, 10, 7, 20]);
        assert_eq!(block_ids(&timeline), vec![1, 2, 4, 3, 1, 5]);

        let spans: Vec<(Ticks, Ticks)> =
            timeline.blocks().iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(spans, vec![(0, 1), (1, 5), (5, 7), (7, 10), (10, 15), (15, 20)]);
    }

    #[test]
    fn test_srtf_first_dispatch_sets_start_once() {
        let mut table = sample_table();
        let mut timeline = Timeline::new();
        srtf(table.processes_mut(), &mut timeline);

        let starts: Vec<Ticks> = table
            .processes()
            .iter()
            .map(|p| p.started_at.unwrap())
            .collect();
        // P1 starts at 0 and is preempted; its start time stays 0.
        assert_eq!(starts, vec![0, 1, 7, 5, 15]);
    }

    #[test]
    fn test_srtf_equal_remaining_keeps_running_lower_id() {
        // At t=3, P4 arrives with burst 2 while P2 has 2 remaining:
        // the tie keeps P2 (lower id) on the CPU.
        let mut table = sample_table();
        let mut timeline = Timeline::new();
        srtf(table.processes_mut(), &mut timeline);
        assert_eq!(table.processes()[1].completed_at, Some(5));
    }

    #[test]
    fn test_preemptive_priority_sample_set() {
        // P2 (priority 1) preempts P1 at t=1 and runs to completion.
        let mut table = sample_table();
        let mut timeline = Timeline::new();
        let clock = preemptive_priority(table.processes_mut(), &mut timeline);

        assert_eq!(clock, 20);
        assert_eq!(completions(table.processes()), vec![12, 5, 15, 7, 20]);
        assert_eq!(block_ids(&timeline), vec![1, 2, 4, 1, 3, 5]);

        let spans: Vec<(Ticks, Ticks)> =
            timeline.blocks().iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(spans, vec![(0, 1), (1, 5), (5, 7), (7, 12), (12, 15), (15, 20)]);
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let mut table = JobTable::new();
        table.push(Process::new("A").with_burst(2)).unwrap();
        table.push(Process::new("B").with_arrival(10).with_burst(1)).unwrap();

        let mut timeline = Timeline::new();
        let clock = srtf(table.processes_mut(), &mut timeline);

        assert_eq!(clock, 11);
        assert_eq!(timeline.block_count(), 2);
        assert_eq!(timeline.blocks()[1].start, 10);
    }

    #[test]
    fn test_single_process_coalesces_to_one_block() {
        let mut table = JobTable::new();
        table.push(Process::new("solo").with_burst(5)).unwrap();

        let mut timeline = Timeline::new();
        preemptive_priority(table.processes_mut(), &mut timeline);

        assert_eq!(timeline.block_count(), 1);
        assert_eq!(timeline.blocks()[0].end, 5);
    }

    #[test]
    fn test_empty_slice_is_noop() {
        let mut timeline = Timeline::new();
        assert_eq!(srtf(&mut [], &mut timeline), 0);
        assert_eq!(preemptive_priority(&mut [], &mut timeline), 0);
        assert!(timeline.is_empty());
    }
}

//! Timing metrics.
//!
//! Derives the per-process metrics after a policy finishes and
//! aggregates them into run-level statistics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst, floored at 0 |
//! | Response | first dispatch − arrival, floored at 0 |
//! | Makespan | latest timeline end |
//! | CPU utilization | busy ticks / makespan |

use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks, Timeline};

/// Derives turnaround, waiting, and response time for every completed
/// process.
///
/// A pure, total pass: processes that never completed (impossible
/// after a full run) are left untouched. Waiting and response use a
/// saturating floor at 0, mirroring the original simulator's defensive
/// clamp; the `debug_assert!`s fire in test builds when the clamp
/// actually engages, which would indicate a scheduling defect such as
/// a process starting before its arrival.
pub(crate) fn apply_process_metrics(procs: &mut [Process]) {
    for p in procs.iter_mut() {
        let completed = match p.completed_at {
            Some(t) => t,
            None => continue,
        };

        debug_assert!(
            completed >= p.arrival + p.burst,
            "process {} completed at {completed}, before arrival {} + burst {}",
            p.id,
            p.arrival,
            p.burst
        );

        p.turnaround = completed.saturating_sub(p.arrival);
        p.waiting = p.turnaround.saturating_sub(p.burst);
        p.response = match p.started_at {
            Some(started) => {
                debug_assert!(
                    started >= p.arrival,
                    "process {} dispatched at {started}, before arrival {}",
                    p.id,
                    p.arrival
                );
                started.saturating_sub(p.arrival)
            }
            None => 0,
        };
    }
}

/// Aggregate statistics for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
    /// Mean response time across all processes.
    pub avg_response: f64,
    /// Latest timeline end (total schedule length, idle gaps included).
    pub makespan: Ticks,
    /// Fraction of the makespan the CPU spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of hand-offs between different processes.
    pub context_switches: usize,
}

impl RunStats {
    /// Computes aggregate statistics from a completed run.
    pub fn calculate(procs: &[Process], timeline: &Timeline) -> Self {
        let count = procs.len();
        let makespan = timeline.makespan();

        if count == 0 {
            return Self {
                avg_turnaround: 0.0,
                avg_waiting: 0.0,
                avg_response: 0.0,
                makespan,
                cpu_utilization: 0.0,
                context_switches: 0,
            };
        }

        let mut total_turnaround = 0u64;
        let mut total_waiting = 0u64;
        let mut total_response = 0u64;
        for p in procs {
            total_turnaround += p.turnaround;
            total_waiting += p.waiting;
            total_response += p.response;
        }

        let busy: Ticks = timeline.blocks().iter().map(|b| b.duration()).sum();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy as f64 / makespan as f64
        };

        Self {
            avg_turnaround: total_turnaround as f64 / count as f64,
            avg_waiting: total_waiting as f64 / count as f64,
            avg_response: total_response as f64 / count as f64,
            makespan,
            cpu_utilization,
            context_switches: timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(name: &str, arrival: Ticks, burst: Ticks, started: Ticks, done: Ticks) -> Process {
        let mut p = Process::new(name).with_arrival(arrival).with_burst(burst);
        p.remaining = 0;
        p.started_at = Some(started);
        p.completed_at = Some(done);
        p
    }

    #[test]
    fn test_metric_identities() {
        let mut procs = vec![
            completed("P1", 0, 6, 0, 6),
            completed("P2", 1, 4, 6, 10),
            completed("P3", 2, 3, 10, 13),
        ];
        apply_process_metrics(&mut procs);

        for p in &procs {
            assert_eq!(p.turnaround, p.completed_at.unwrap() - p.arrival);
            assert_eq!(p.turnaround, p.waiting + p.burst);
        }
        assert_eq!(procs[0].waiting, 0);
        assert_eq!(procs[1].waiting, 5);
        assert_eq!(procs[2].waiting, 8);
    }

    #[test]
    fn test_response_equals_start_minus_arrival() {
        let mut procs = vec![completed("P", 2, 3, 7, 10)];
        apply_process_metrics(&mut procs);
        assert_eq!(procs[0].response, 5);
    }

    #[test]
    fn test_incomplete_process_untouched() {
        let mut p = Process::new("pending").with_burst(4);
        p.remaining = 2;
        let mut procs = vec![p];
        apply_process_metrics(&mut procs);
        assert_eq!(procs[0].turnaround, 0);
        assert_eq!(procs[0].waiting, 0);
    }

    #[test]
    fn test_stats_averages() {
        let mut procs = vec![
            completed("P1", 0, 6, 0, 6),
            completed("P2", 1, 4, 6, 10),
        ];
        apply_process_metrics(&mut procs);

        let mut timeline = Timeline::new();
        timeline.record(1, 0, 6);
        timeline.record(2, 6, 10);

        let stats = RunStats::calculate(&procs, &timeline);
        // Turnarounds 6 and 9, waits 0 and 5, responses 0 and 5.
        assert!((stats.avg_turnaround - 7.5).abs() < 1e-10);
        assert!((stats.avg_waiting - 2.5).abs() < 1e-10);
        assert!((stats.avg_response - 2.5).abs() < 1e-10);
        assert_eq!(stats.makespan, 10);
        assert!((stats.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(stats.context_switches, 1);
    }

    #[test]
    fn test_stats_idle_time_lowers_utilization() {
        let mut procs = vec![completed("late", 5, 5, 5, 10)];
        apply_process_metrics(&mut procs);

        let mut timeline = Timeline::new();
        timeline.record(1, 5, 10);

        let stats = RunStats::calculate(&procs, &timeline);
        assert_eq!(stats.makespan, 10);
        assert!((stats.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        let stats = RunStats::calculate(&[], &Timeline::new());
        assert_eq!(stats.makespan, 0);
        assert!((stats.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((stats.cpu_utilization - 0.0).abs() < 1e-10);
        assert_eq!(stats.context_switches, 0);
    }
}

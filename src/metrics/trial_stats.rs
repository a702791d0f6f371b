//! Aggregation of trial outcomes
//!
//! Accumulates per-cause counts and step totals across independent trials
//! and formats the end-of-run summary.

use crate::game::{EndCause, GameOutcome};

/// Per-cause counts and cumulative step totals over a batch of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialStats {
    die_count: u64,
    die_steps: u64,
    out_of_box_count: u64,
    out_of_box_steps: u64,
}

impl TrialStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished trial.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.cause {
            EndCause::SelfCollision => {
                self.die_count += 1;
                self.die_steps += outcome.steps;
            }
            EndCause::OutOfBounds => {
                self.out_of_box_count += 1;
                self.out_of_box_steps += outcome.steps;
            }
        }
    }

    /// Fold another batch into this one. Used by the parallel harness to
    /// reduce per-worker accumulators after all trials have finished.
    pub fn merge(&mut self, other: &TrialStats) {
        self.die_count += other.die_count;
        self.die_steps += other.die_steps;
        self.out_of_box_count += other.out_of_box_count;
        self.out_of_box_steps += other.out_of_box_steps;
    }

    pub fn count(&self, cause: EndCause) -> u64 {
        match cause {
            EndCause::SelfCollision => self.die_count,
            EndCause::OutOfBounds => self.out_of_box_count,
        }
    }

    pub fn total_steps(&self, cause: EndCause) -> u64 {
        match cause {
            EndCause::SelfCollision => self.die_steps,
            EndCause::OutOfBounds => self.out_of_box_steps,
        }
    }

    pub fn total_trials(&self) -> u64 {
        self.die_count + self.out_of_box_count
    }

    /// Average steps for a cause, or `None` if that cause was never seen.
    /// No divisor fudging: a zero-trial cause has no average.
    pub fn average_steps(&self, cause: EndCause) -> Option<f64> {
        let count = self.count(cause);
        if count == 0 {
            None
        } else {
            Some(self.total_steps(cause) as f64 / count as f64)
        }
    }

    /// Format the two-line end-of-run summary: counts, then averages.
    pub fn format_summary(&self) -> String {
        format!(
            "snake die: {} times, out of box: {} times, total: {} times\n\
             avg steps of snake die: {}, avg steps of out of box: {}",
            self.die_count,
            self.out_of_box_count,
            self.total_trials(),
            format_average(self.average_steps(EndCause::SelfCollision)),
            format_average(self.average_steps(EndCause::OutOfBounds)),
        )
    }
}

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{:.2}", avg),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(cause: EndCause, steps: u64) -> GameOutcome {
        GameOutcome { cause, steps }
    }

    #[test]
    fn test_empty_stats() {
        let stats = TrialStats::new();
        assert_eq!(stats.total_trials(), 0);
        assert_eq!(stats.average_steps(EndCause::SelfCollision), None);
        assert_eq!(stats.average_steps(EndCause::OutOfBounds), None);
    }

    #[test]
    fn test_record_accumulates_per_cause() {
        let mut stats = TrialStats::new();
        stats.record(outcome(EndCause::SelfCollision, 100));
        stats.record(outcome(EndCause::SelfCollision, 200));
        stats.record(outcome(EndCause::OutOfBounds, 40));

        assert_eq!(stats.count(EndCause::SelfCollision), 2);
        assert_eq!(stats.count(EndCause::OutOfBounds), 1);
        assert_eq!(stats.total_trials(), 3);
        assert_eq!(stats.average_steps(EndCause::SelfCollision), Some(150.0));
        assert_eq!(stats.average_steps(EndCause::OutOfBounds), Some(40.0));
    }

    #[test]
    fn test_merge_matches_sequential_record() {
        let outcomes = [
            outcome(EndCause::SelfCollision, 10),
            outcome(EndCause::OutOfBounds, 20),
            outcome(EndCause::OutOfBounds, 30),
            outcome(EndCause::SelfCollision, 40),
        ];

        let mut sequential = TrialStats::new();
        for o in outcomes {
            sequential.record(o);
        }

        let mut left = TrialStats::new();
        left.record(outcomes[0]);
        left.record(outcomes[1]);
        let mut right = TrialStats::new();
        right.record(outcomes[2]);
        right.record(outcomes[3]);
        left.merge(&right);

        assert_eq!(left, sequential);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = TrialStats::new();
        stats.record(outcome(EndCause::SelfCollision, 100));
        stats.record(outcome(EndCause::OutOfBounds, 41));

        let summary = stats.format_summary();
        assert!(summary.contains("snake die: 1 times"));
        assert!(summary.contains("out of box: 1 times"));
        assert!(summary.contains("total: 2 times"));
        assert!(summary.contains("avg steps of snake die: 100.00"));
        assert!(summary.contains("avg steps of out of box: 41.00"));
    }

    #[test]
    fn test_format_summary_with_unseen_cause() {
        let mut stats = TrialStats::new();
        stats.record(outcome(EndCause::OutOfBounds, 10));

        let summary = stats.format_summary();
        assert!(summary.contains("avg steps of snake die: n/a"));
    }
}

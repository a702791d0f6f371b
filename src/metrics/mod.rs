pub mod trial_stats;

pub use trial_stats::TrialStats;

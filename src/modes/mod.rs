pub mod single;
pub mod stats;

pub use single::SingleMode;
pub use stats::StatsMode;

//! Diagnostics attached to trial evaluations.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

//! Online-user roster and typing snapshots

mod tracker;

pub use tracker::RosterTracker;

//! Reconciles live upstream statistics against the stored baseline of a
//! player and reports the difference.

pub mod delta;
pub mod engine;
pub mod error;
pub mod recent;
pub mod traits;
pub mod view;

#[cfg(test)]
mod testing;

pub use delta::Delta;
pub use engine::Tracker;
pub use error::{Result, TrackerError};
pub use recent::{RECENT_PLAY_WINDOW, RecentPlayFilter};
pub use traits::{PlayerSource, SnapshotStore};
pub use view::PlayerView;

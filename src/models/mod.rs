pub mod event;
pub mod severity;
pub mod severity_counts;
pub mod trip;
pub mod trip_summary;

pub use event::Event;
pub use severity::Severity;
pub use severity_counts::SeverityCounts;
pub use trip::Trip;
pub use trip_summary::{TripListItem, TripSummary};

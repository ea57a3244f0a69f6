//! PeakSeek estimates the highest points inside a region by random-restart
//! hill climbing against an elevation lookup service.
//!
//! Candidates are drawn uniformly inside a disk around a center coordinate,
//! each candidate takes a single diagonal ascent step, and the winners pass
//! through a bounded top-K tracker. Lookups can fan out with the `rayon`
//! feature; the `http` feature provides a blocking client for a remote
//! service.

mod candidate;
pub mod elevation;
pub mod lowlevel;
pub mod point;
pub mod report;
pub mod search;
mod trace;
pub mod util;

pub use candidate::topk::{PeakTracker, TrackerMode};
pub use elevation::{CountingSource, ElevationSource, FnSource};
#[cfg(feature = "http")]
pub use elevation::HttpElevationSource;
pub use point::{LatLon, Point};
pub use report::{meters_to_feet, HighPointsReport, ReportEntry};
pub use search::{PeakSearcher, SearchConfig};
pub use util::{PeakSeekError, PeakSeekResult};

//! Building blocks for custom search pipelines.
//!
//! These expose the individual stages behind [`PeakSearcher`]: disk
//! sampling, the single ascent step, and the tracker. Most users should
//! prefer the top-level `PeakSearcher` API.
//!
//! [`PeakSearcher`]: crate::PeakSearcher

pub use crate::candidate::sampler::sample_disk;
pub use crate::candidate::topk::{PeakTracker, TrackerMode};
pub use crate::report::{FEET_PER_METER, ORDINAL_LABELS, REPORT_SLOTS};
pub use crate::search::ascent::{ascend, diagonal_neighbors, select_highest};

//! Random-restart, single-step hill climbing over an elevation source.
//!
//! Candidates are drawn uniformly inside a disk around the center, each one
//! climbs a single diagonal step, and the winners flow through a bounded
//! tracker in candidate order.

pub(crate) mod ascent;
pub(crate) mod pipeline;

use crate::candidate::sampler::sample_disk;
use crate::candidate::topk::{PeakTracker, TrackerMode};
use crate::elevation::ElevationSource;
use crate::point::{LatLon, Point};
use crate::report::HighPointsReport;
use crate::trace::{trace_event, trace_span};
use crate::util::{PeakSeekError, PeakSeekResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for a high-point search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Number of random candidates.
    pub samples: usize,
    /// Sampling disk radius in degrees.
    pub radius_deg: f64,
    /// Diagonal neighbour offset in degrees.
    pub step_deg: f64,
    /// Maximum number of tracked high points.
    pub keep: usize,
    /// Tracker replacement policy.
    pub tracker: TrackerMode,
    /// Fan out elevation lookups (requires the `rayon` feature; ignored
    /// otherwise).
    pub parallel: bool,
    /// Seed for candidate sampling; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            radius_deg: 0.5,
            step_deg: 0.0005,
            keep: 10,
            tracker: TrackerMode::Greedy,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Checks that the numeric parameters are usable.
    pub fn validate(&self) -> PeakSeekResult<()> {
        if !self.radius_deg.is_finite() || self.radius_deg < 0.0 {
            return Err(PeakSeekError::InvalidInput(
                "radius_deg must be finite and non-negative",
            ));
        }
        if !self.step_deg.is_finite() || self.step_deg <= 0.0 {
            return Err(PeakSeekError::InvalidInput(
                "step_deg must be finite and positive",
            ));
        }
        if self.keep == 0 {
            return Err(PeakSeekError::InvalidInput("keep must be at least 1"));
        }
        Ok(())
    }
}

/// High-point searcher bound to an elevation source.
pub struct PeakSearcher<S> {
    source: S,
    cfg: SearchConfig,
}

impl<S: ElevationSource> PeakSearcher<S> {
    /// Creates a searcher with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cfg: SearchConfig::default(),
        }
    }

    /// Returns a searcher with a custom configuration.
    pub fn with_config(mut self, cfg: SearchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.cfg
    }

    /// Returns the elevation source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the search around `center`.
    ///
    /// Returns the tracked points in insertion/replacement order. Any lookup
    /// failure aborts the run.
    pub fn search(&self, center: LatLon) -> PeakSeekResult<Vec<Point>> {
        match self.cfg.seed {
            Some(seed) => self.search_with_rng(center, &mut StdRng::seed_from_u64(seed)),
            None => self.search_with_rng(center, &mut StdRng::from_os_rng()),
        }
    }

    /// Runs the search drawing candidates from `rng`.
    pub fn search_with_rng<R: Rng + ?Sized>(
        &self,
        center: LatLon,
        rng: &mut R,
    ) -> PeakSeekResult<Vec<Point>> {
        self.cfg.validate()?;
        let _span = trace_span!(
            "peak_search",
            lat = center.lat,
            lon = center.lon,
            samples = self.cfg.samples
        )
        .entered();

        let coords = sample_disk(center, self.cfg.samples, self.cfg.radius_deg, rng);
        let candidates = self.sample_elevations(&coords)?;

        let mut tracker = PeakTracker::new(self.cfg.keep, self.cfg.tracker);
        self.ascend_candidates(&candidates, &mut tracker)?;

        trace_event!("tracker_final", count = tracker.len());
        Ok(tracker.into_points())
    }

    /// Runs the search and assembles the ten-slot report.
    pub fn search_report(&self, center: LatLon) -> PeakSeekResult<HighPointsReport> {
        let points = self.search(center)?;
        HighPointsReport::from_points(&points)
    }

    fn sample_elevations(&self, coords: &[LatLon]) -> PeakSeekResult<Vec<Point>> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return pipeline::sample_elevations_par(&self.source, coords);
        }
        pipeline::sample_elevations(&self.source, coords)
    }

    fn ascend_candidates(
        &self,
        candidates: &[Point],
        tracker: &mut PeakTracker,
    ) -> PeakSeekResult<()> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return pipeline::ascend_candidates_par(
                &self.source,
                candidates,
                self.cfg.step_deg,
                tracker,
            );
        }
        pipeline::ascend_candidates(&self.source, candidates, self.cfg.step_deg, tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::{PeakSearcher, SearchConfig};
    use crate::elevation::FnSource;
    use crate::point::LatLon;
    use crate::PeakSeekError;

    #[test]
    fn default_config_matches_fixed_constants() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.samples, 100);
        assert_eq!(cfg.radius_deg, 0.5);
        assert_eq!(cfg.step_deg, 0.0005);
        assert_eq!(cfg.keep, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let bad_step = SearchConfig {
            step_deg: 0.0,
            ..SearchConfig::default()
        };
        assert_eq!(
            bad_step.validate().err().unwrap(),
            PeakSeekError::InvalidInput("step_deg must be finite and positive")
        );

        let bad_radius = SearchConfig {
            radius_deg: f64::NAN,
            ..SearchConfig::default()
        };
        assert!(bad_radius.validate().is_err());

        let no_keep = SearchConfig {
            keep: 0,
            ..SearchConfig::default()
        };
        assert!(no_keep.validate().is_err());
    }

    #[test]
    fn zero_samples_yield_empty_result_and_failing_report() {
        let searcher = PeakSearcher::new(FnSource::new(|_, _| Ok(1.0))).with_config(SearchConfig {
            samples: 0,
            seed: Some(3),
            ..SearchConfig::default()
        });
        let center = LatLon::new(0.0, 0.0);
        assert!(searcher.search(center).unwrap().is_empty());
        assert_eq!(
            searcher.search_report(center).err().unwrap(),
            PeakSeekError::InsufficientPoints { needed: 10, got: 0 }
        );
    }
}

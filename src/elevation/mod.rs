//! Elevation lookup seam.
//!
//! The search only needs `elevation(lat, lon) -> meters`. Sources are called
//! once per lookup; nothing is cached or retried here.

use crate::util::PeakSeekResult;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpElevationSource, DEFAULT_BASE_URL, DEFAULT_DATASET};

/// Source of point elevations in meters.
///
/// Sources are `Sync` so independent lookups can fan out across threads.
pub trait ElevationSource: Sync {
    /// Returns the elevation at `(lat, lon)` in meters.
    fn elevation(&self, lat: f64, lon: f64) -> PeakSeekResult<f64>;
}

impl<T: ElevationSource + ?Sized> ElevationSource for &T {
    fn elevation(&self, lat: f64, lon: f64) -> PeakSeekResult<f64> {
        (**self).elevation(lat, lon)
    }
}

/// Adapts a closure into an [`ElevationSource`].
#[derive(Clone, Copy, Debug)]
pub struct FnSource<F> {
    f: F,
}

impl<F> FnSource<F>
where
    F: Fn(f64, f64) -> PeakSeekResult<f64> + Sync,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ElevationSource for FnSource<F>
where
    F: Fn(f64, f64) -> PeakSeekResult<f64> + Sync,
{
    fn elevation(&self, lat: f64, lon: f64) -> PeakSeekResult<f64> {
        (self.f)(lat, lon)
    }
}

/// Wraps a source and counts how many lookups reach it.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S: ElevationSource> CountingSource<S> {
    /// Wraps `inner` with a zeroed counter.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ElevationSource> ElevationSource for CountingSource<S> {
    fn elevation(&self, lat: f64, lon: f64) -> PeakSeekResult<f64> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.elevation(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::{CountingSource, ElevationSource, FnSource};
    use crate::PeakSeekError;

    #[test]
    fn fn_source_forwards_coordinates() {
        let src = FnSource::new(|lat, lon| Ok(lat * 10.0 + lon));
        assert_eq!(src.elevation(2.0, 3.0).unwrap(), 23.0);
    }

    #[test]
    fn counting_source_counts_failures_too() {
        let src = CountingSource::new(FnSource::new(|lat, lon| {
            if lat < 0.0 {
                Err(PeakSeekError::MissingElevation { lat, lon })
            } else {
                Ok(1.0)
            }
        }));
        assert!(src.elevation(1.0, 0.0).is_ok());
        assert!(src.elevation(-1.0, 0.0).is_err());
        assert_eq!(src.calls(), 2);
    }
}

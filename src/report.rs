//! Fixed-shape report of the tracked high points.
//!
//! Elevations are converted to whole feet; entries keep tracker order and are
//! labelled "one" through "ten".

use crate::point::Point;
use crate::util::{PeakSeekError, PeakSeekResult};

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.2808;

/// Slot labels, in output order.
pub const ORDINAL_LABELS: [&str; REPORT_SLOTS] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Number of entries in a report.
pub const REPORT_SLOTS: usize = 10;

/// Converts meters to feet, rounded to the nearest integer.
///
/// Exact halves round to even.
pub fn meters_to_feet(meters: f64) -> i64 {
    (meters * FEET_PER_METER).round_ties_even() as i64
}

/// One labelled slot of a [`HighPointsReport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportEntry {
    /// Ordinal label ("one".."ten").
    pub label: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Elevation in feet.
    pub elevation_ft: i64,
}

/// Ten labelled high points in discovery order (not ranked).
#[derive(Clone, Debug, PartialEq)]
pub struct HighPointsReport {
    entries: [ReportEntry; REPORT_SLOTS],
}

impl HighPointsReport {
    /// Builds a report from the first ten tracked points.
    pub fn from_points(points: &[Point]) -> PeakSeekResult<Self> {
        if points.len() < REPORT_SLOTS {
            return Err(PeakSeekError::InsufficientPoints {
                needed: REPORT_SLOTS,
                got: points.len(),
            });
        }

        let entries = std::array::from_fn(|i| {
            let p = points[i];
            ReportEntry {
                label: ORDINAL_LABELS[i],
                lat: p.lat,
                lng: p.lon,
                elevation_ft: meters_to_feet(p.elevation),
            }
        });
        Ok(Self { entries })
    }

    /// Entries in slot order.
    pub fn entries(&self) -> &[ReportEntry; REPORT_SLOTS] {
        &self.entries
    }

    /// Looks up an entry by label.
    pub fn get(&self, label: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::{meters_to_feet, HighPointsReport, ORDINAL_LABELS};
    use crate::point::Point;
    use crate::PeakSeekError;

    #[test]
    fn meters_to_feet_known_values() {
        assert_eq!(meters_to_feet(0.0), 0);
        assert_eq!(meters_to_feet(1.0), 3);
        assert_eq!(meters_to_feet(-10.0), -33);
        assert_eq!(meters_to_feet(1000.0), 3281);
    }

    #[test]
    fn report_requires_ten_points() {
        let pts = vec![Point::new(0.0, 0.0, 1.0); 9];
        let err = HighPointsReport::from_points(&pts).err().unwrap();
        assert_eq!(err, PeakSeekError::InsufficientPoints { needed: 10, got: 9 });
    }

    #[test]
    fn report_keeps_input_order() {
        let pts: Vec<Point> = (0..10)
            .map(|i| Point::new(i as f64, -(i as f64), (10 - i) as f64))
            .collect();
        let report = HighPointsReport::from_points(&pts).unwrap();
        for (i, entry) in report.entries().iter().enumerate() {
            assert_eq!(entry.label, ORDINAL_LABELS[i]);
            assert_eq!(entry.lat, i as f64);
            assert_eq!(entry.lng, -(i as f64));
        }
        assert_eq!(report.get("ten").unwrap().elevation_ft, 3);
        assert!(report.get("eleven").is_none());
    }
}

//! Coordinate and elevation sample types.

/// Latitude/longitude pair in degrees.
///
/// Values are not range checked; they are forwarded to the elevation source
/// as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl LatLon {
    /// Creates a coordinate pair.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns this coordinate shifted by `(dlat, dlon)` degrees.
    pub fn offset(self, dlat: f64, dlon: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }
}

/// Sampled location with its elevation in meters.
///
/// Points compare by elevation only when ranked; coordinates carry no
/// identity, so two climbs may produce equal points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation in meters.
    pub elevation: f64,
}

impl Point {
    /// Creates a point with a known elevation.
    pub const fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }

    /// Creates a point whose elevation has not been looked up yet (0.0).
    pub const fn unsampled(coord: LatLon) -> Self {
        Self::at(coord, 0.0)
    }

    /// Creates a point at `coord` with `elevation`.
    pub const fn at(coord: LatLon, elevation: f64) -> Self {
        Self {
            lat: coord.lat,
            lon: coord.lon,
            elevation,
        }
    }

    /// Returns the coordinate of this point.
    pub fn coord(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

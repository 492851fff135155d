//! Map viewport: where the world map is centred and how far it is zoomed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Centre used for the aggregate view.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 24.0, lng: 54.0 };

/// Zoom for the aggregate view; shows the whole world.
pub const GLOBAL_ZOOM: u8 = 2;

/// Zoom once a single country is selected.
pub const COUNTRY_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapViewport {
    pub fn global() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: GLOBAL_ZOOM,
        }
    }

    pub fn country(lat: f64, long: f64) -> Self {
        Self {
            center: LatLng { lat, lng: long },
            zoom: COUNTRY_ZOOM,
        }
    }

    /// Canvas bounds `(x_bounds, y_bounds)` in degrees.
    ///
    /// Each zoom step past [`GLOBAL_ZOOM`] halves the visible span. The window
    /// is shifted, not shrunk, to stay inside the world.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let factor = 2f64.powi(i32::from(self.zoom.saturating_sub(GLOBAL_ZOOM)));
        (
            clamp_window(self.center.lng, 360.0 / factor, 180.0),
            clamp_window(self.center.lat, 180.0 / factor, 90.0),
        )
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::global()
    }
}

fn clamp_window(center: f64, span: f64, limit: f64) -> [f64; 2] {
    let half = span / 2.0;
    let mut min = center - half;
    let mut max = center + half;
    if min < -limit {
        max += -limit - min;
        min = -limit;
    }
    if max > limit {
        min -= max - limit;
        max = limit;
    }
    [min.max(-limit), max]
}

//! Web-mercator helpers for converting meter radii into screen pixels.

/// Equatorial circumference in meters.
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
/// World width in pixels at zoom 0, matching the layer library's tiles.
const WORLD_SIZE_PX: f64 = 512.0;

/// Ground meters covered by one screen pixel at `zoom` and `latitude`.
#[must_use]
pub fn meters_per_pixel(zoom: f64, latitude: f64) -> f64 {
    EARTH_CIRCUMFERENCE_M * latitude.to_radians().cos() / (WORLD_SIZE_PX * zoom.exp2())
}

/// Screen radius for a meter radius, clamped to the layer's pixel floor.
#[must_use]
pub fn on_screen_radius_px(radius_m: f64, min_pixels: f64, zoom: f64, latitude: f64) -> f64 {
    let mpp = meters_per_pixel(zoom, latitude);
    let raw = if mpp > 0.0 { radius_m / mpp } else { 0.0 };
    raw.max(min_pixels)
}

#[cfg(test)]
mod tests {
    use super::{meters_per_pixel, on_screen_radius_px};

    #[test]
    fn meters_per_pixel_halves_per_zoom_level() {
        let z10 = meters_per_pixel(10.0, 55.9533);
        let z11 = meters_per_pixel(11.0, 55.9533);
        assert!((z10 / z11 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_radius_hits_pixel_floor() {
        assert_eq!(on_screen_radius_px(0.0, 20.0, 11.3, 55.9533), 20.0);
        assert!(on_screen_radius_px(10_000.0, 20.0, 11.3, 55.9533) > 20.0);
    }
}

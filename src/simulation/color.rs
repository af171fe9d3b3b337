use glam::Vec3;

/// Converts HSV to RGB in [0, 1].
///
/// * `hue` - degrees, wrapped onto [0, 360) so values past a full turn keep cycling
/// * `saturation` - 0.0 (gray) to 1.0 (vivid)
/// * `value` - 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Vec3 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = (h as u32).min(5); // rem_euclid can round up to exactly 360.0
    let f = h - sector as f32;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Vec3::new(r, g, b)
}

/// Hue for a particle spawned `distance` away from the center.
pub fn hue_for_distance(distance: f32, scale: f32) -> f32 {
    (distance / scale) * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).abs().max_element() < eps
    }

    #[test]
    fn primaries() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0), 1e-6));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0), 1e-6));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0), 1e-6));
    }

    #[test]
    fn red_dominant_with_partial_saturation() {
        let c = hsv_to_rgb(0.0, 0.8, 1.0);
        assert_eq!(c.x, 1.0);
        assert!((c.y - 0.2).abs() < 1e-6);
        assert!((c.z - 0.2).abs() < 1e-6);
    }

    #[test]
    fn continuous_across_every_sector_boundary() {
        for boundary in [60.0_f32, 120.0, 180.0, 240.0, 300.0, 360.0] {
            let below = hsv_to_rgb(boundary - 0.01, 1.0, 1.0);
            let above = hsv_to_rgb(boundary + 0.01, 1.0, 1.0);
            assert!(close(below, above, 1e-3), "jump at {boundary}: {below:?} vs {above:?}");
        }
    }

    #[test]
    fn hue_wraps() {
        assert!(close(hsv_to_rgb(400.0, 1.0, 1.0), hsv_to_rgb(40.0, 1.0, 1.0), 1e-5));
        assert!(close(hsv_to_rgb(-60.0, 1.0, 1.0), hsv_to_rgb(300.0, 1.0, 1.0), 1e-5));
    }

    #[test]
    fn distance_hue() {
        assert_eq!(hue_for_distance(250.0, 500.0), 180.0);
        assert_eq!(hue_for_distance(0.0, 500.0), 0.0);
    }
}

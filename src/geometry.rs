/// Angles are measured in degrees, clockwise from 12 o'clock.
pub fn polar_to_cartesian(cx: f32, cy: f32, radius: f32, angle_deg: f32) -> (f32, f32) {
    let angle_rad = (angle_deg - 90.0).to_radians();
    (
        cx + radius * angle_rad.cos(),
        cy + radius * angle_rad.sin(),
    )
}

/// Closed wedge path from the circle center out to the arc between
/// `start_angle` and `end_angle`. The arc is drawn from the later angle
/// back to the earlier one with sweep-flag 0, so the large-arc flag must
/// flip exactly when the span exceeds a half turn.
pub fn describe_arc(cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) -> String {
    let (ax, ay) = polar_to_cartesian(cx, cy, radius, end_angle);
    let (bx, by) = polar_to_cartesian(cx, cy, radius, start_angle);
    let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {ax:.2} {ay:.2} A {radius:.2} {radius:.2} 0 {large_arc} 0 {bx:.2} {by:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn polar_zero_degrees_points_up() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
        assert!(close(x, 100.0));
        assert!(close(y, 50.0));
    }

    #[test]
    fn polar_quarter_turns() {
        let (x, y) = polar_to_cartesian(0.0, 0.0, 10.0, 90.0);
        assert!(close(x, 10.0));
        assert!(close(y, 0.0));
        let (x, y) = polar_to_cartesian(0.0, 0.0, 10.0, 180.0);
        assert!(close(x, 0.0));
        assert!(close(y, 10.0));
        let (x, y) = polar_to_cartesian(0.0, 0.0, 10.0, 270.0);
        assert!(close(x, -10.0));
        assert!(close(y, 0.0));
    }

    #[test]
    fn half_share_uses_small_arc_flag() {
        // 180 degrees is not "greater than half", so the flag stays 0.
        let d = describe_arc(50.0, 50.0, 40.0, 0.0, 180.0);
        assert!(d.contains(" 0 0 "), "unexpected flags in {d}");
        assert!(d.starts_with("M 50.00 50.00 L 50.00 90.00"));
        assert!(d.ends_with("50.00 10.00 Z"));
    }

    #[test]
    fn majority_share_sets_large_arc_flag() {
        let d = describe_arc(50.0, 50.0, 40.0, 0.0, 216.0);
        assert!(d.contains(" 1 0 "), "expected large-arc flag in {d}");
    }

    #[test]
    fn near_zero_span_degenerates_quietly() {
        let d = describe_arc(50.0, 50.0, 40.0, 120.0, 120.01);
        assert!(d.starts_with("M 50.00 50.00"));
        assert!(d.ends_with("Z"));
    }
}

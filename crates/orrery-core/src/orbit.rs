//! Orbit-to-screen mapping. Pure math, no engine dependencies.
//!
//! Time and angles use f64 throughout (long sessions accumulate large
//! simulated times); convert to f32 only at the final screen-coordinate
//! step in the render loop.

use glam::Vec2;

use crate::sim::state::ScaleMode;

/// One model year in model days. The builtin Earth entry has a period of
/// 365.25 days, so Earth completes exactly one orbit per model year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Innermost orbit guide radius, before per-body scaling.
pub const BASE_ORBIT_PX: f64 = 50.0;
/// Pixels of orbit radius per AU in visual mode.
pub const VISUAL_PX_PER_AU: f64 = 30.0;
/// Pixels of orbit radius per log-AU in realistic mode.
pub const REALISTIC_PX_PER_LOG_AU: f64 = 40.0;

/// Screen radius of a planet's orbit guide.
///
/// Visual mode spreads orbits linearly so the inner system stays
/// readable; realistic mode compresses logarithmically so Mercury and
/// Neptune fit the same canvas. Both are clamped to the canvas
/// half-extent minus a margin before the zoom multiply, so outer planets
/// never leave the screen at zoom 1.
pub fn orbit_radius_px(
    semi_major_axis_au: f64,
    mode: ScaleMode,
    half_extent_px: f64,
    margin_px: f64,
    zoom: f64,
) -> f64 {
    let spread = match mode {
        ScaleMode::Visual => semi_major_axis_au * VISUAL_PX_PER_AU,
        ScaleMode::Realistic => (semi_major_axis_au + 1.0).ln() * REALISTIC_PX_PER_LOG_AU,
    };
    (BASE_ORBIT_PX + spread).min(half_extent_px - margin_px) * zoom
}

/// Screen radius of a planet disc.
///
/// Size tracks log(radius_km / 1000) with a floor so small bodies stay
/// visible and clickable. Visual mode exaggerates; realistic mode keeps
/// planets small relative to their orbits.
pub fn planet_radius_px(radius_km: f64, mode: ScaleMode, zoom: f64) -> f64 {
    let log_size = (radius_km / 1000.0).ln();
    let unscaled = match mode {
        ScaleMode::Realistic => (log_size * 2.0).max(2.0),
        ScaleMode::Visual => (log_size * 3.0 + 5.0).max(3.0),
    };
    unscaled * zoom
}

/// Angular position of a planet at `time_years`.
///
/// Proportional to the fraction of one orbital period completed. No
/// explicit modulo; consumers feed this straight to cos/sin.
pub fn angle_rad(time_years: f64, orbital_period_days: f64) -> f64 {
    (time_years * DAYS_PER_YEAR / orbital_period_days) * std::f64::consts::TAU
}

/// Screen position on the orbit circle around the (panned) center.
pub fn position(center: Vec2, pan: Vec2, angle: f64, orbit_radius: f64) -> Vec2 {
    Vec2::new(
        center.x + pan.x + (angle.cos() * orbit_radius) as f32,
        center.y + pan.y + (angle.sin() * orbit_radius) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: f64 = 400.0;
    const MARGIN: f64 = 50.0;

    #[test]
    fn orbit_radius_monotone_in_semi_major_axis() {
        // Mercury through Neptune in AU.
        let aus = [0.387, 0.723, 1.0, 1.524, 5.204, 9.582, 19.19, 30.07];
        for mode in [ScaleMode::Visual, ScaleMode::Realistic] {
            for pair in aus.windows(2) {
                let near = orbit_radius_px(pair[0], mode, HALF, MARGIN, 1.0);
                let far = orbit_radius_px(pair[1], mode, HALF, MARGIN, 1.0);
                assert!(near <= far, "{mode:?}: r({}) > r({})", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn orbit_radius_clamped_to_canvas() {
        // Visual mode would put Neptune at 50 + 30.07*30 ≈ 952 px.
        let r = orbit_radius_px(30.07, ScaleMode::Visual, HALF, MARGIN, 1.0);
        assert_eq!(r, HALF - MARGIN);
    }

    #[test]
    fn orbit_radius_scales_with_zoom() {
        let r1 = orbit_radius_px(1.0, ScaleMode::Visual, HALF, MARGIN, 1.0);
        let r2 = orbit_radius_px(1.0, ScaleMode::Visual, HALF, MARGIN, 2.0);
        assert!((r2 - r1 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn planet_radius_has_a_floor() {
        // 100 km body: log term is negative, floor applies in both modes.
        assert_eq!(planet_radius_px(100.0, ScaleMode::Realistic, 1.0), 2.0);
        assert_eq!(planet_radius_px(100.0, ScaleMode::Visual, 1.0), 3.0);
    }

    #[test]
    fn visual_mode_exaggerates_planets() {
        let realistic = planet_radius_px(69911.0, ScaleMode::Realistic, 1.0);
        let visual = planet_radius_px(69911.0, ScaleMode::Visual, 1.0);
        assert!(visual > realistic);
    }

    #[test]
    fn angle_strictly_increases_with_time() {
        let mut prev = angle_rad(0.0, 365.25);
        for i in 1..100 {
            let t = i as f64 * 0.01;
            let angle = angle_rad(t, 365.25);
            assert!(angle > prev);
            prev = angle;
        }
    }

    #[test]
    fn angle_after_one_period_wraps_to_start() {
        // Period of 100 model days = 100/365.25 model years.
        let period_years = 100.0 / DAYS_PER_YEAR;
        let start = angle_rad(0.3, 100.0);
        let after = angle_rad(0.3 + period_years, 100.0);
        let delta = (after - start) - std::f64::consts::TAU;
        assert!(delta.abs() < 1e-9, "delta = {delta}");
    }

    #[test]
    fn earth_completes_one_orbit_per_model_year() {
        let swept = angle_rad(1.0, 365.25) - angle_rad(0.0, 365.25);
        assert!((swept - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn position_offsets_from_panned_center() {
        let center = Vec2::new(400.0, 300.0);
        let pan = Vec2::new(10.0, -20.0);
        let pos = position(center, pan, 0.0, 100.0);
        assert!((pos.x - 510.0).abs() < 1e-4);
        assert!((pos.y - 280.0).abs() < 1e-4);
    }

    #[test]
    fn angle_keeps_precision_over_long_sessions() {
        // Hundreds of simulated years: successive frames must still move.
        let t = 500.0;
        let step = 0.5 * 0.002; // default speed × years-per-tick
        let a1 = angle_rad(t, 365.25);
        let a2 = angle_rad(t + step, 365.25);
        assert!(a2 > a1);
    }
}

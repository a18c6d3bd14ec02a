use std::f64::consts::PI;

use bevy::prelude::*;

use super::builder::GlobeArc;
use super::builder::MarkerGlow;
use super::config::GlobeConfig;
use super::constants::ARC_FLICKER_AMPLITUDE;
use super::constants::ARC_FLICKER_BASE_ALPHA;
use super::constants::ARC_FLICKER_SPEED;
use super::constants::GLOW_ALPHA_AMPLITUDE;
use super::constants::GLOW_BASE_ALPHA;
use super::constants::GLOW_PULSE_SPEED;
use super::constants::GLOW_SCALE_AMPLITUDE;
use crate::schedule::FrameSet;
use crate::traits::F64Ext;
use crate::traits::UsizeExt;

pub struct GlobeAnimationPlugin;

impl Plugin for GlobeAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<ArcGizmo>()
            .add_systems(
                Update,
                configure_arc_gizmo.run_if(resource_changed::<GlobeConfig>),
            )
            .add_systems(
                Update,
                (pulse_marker_glow, draw_arcs).in_set(FrameSet::Animation),
            );
    }
}

#[derive(Default, Reflect, GizmoConfigGroup)]
struct ArcGizmo {}

fn configure_arc_gizmo(mut config_store: ResMut<GizmoConfigStore>, config: Res<GlobeConfig>) {
    let (gizmo_config, _) = config_store.config_mut::<ArcGizmo>();
    gizmo_config.line.width = config.arc_line_width;
}

/// |sin(elapsed * speed + offset)| with the argument reduced to one period in
/// `f64`, so the wave stays smooth however long the app has been running
fn abs_sin_wave(elapsed: f64, speed: f32, offset: f32) -> f32 {
    elapsed
        .mul_add(f64::from(speed), f64::from(offset))
        .rem_euclid(PI)
        .to_f32()
        .sin()
        .abs()
}

/// Scale and opacity of a marker glow at `elapsed` seconds.
/// Both follow the same |sin| wave so the halo swells as it brightens.
pub fn glow_pulse(elapsed: f64, phase: f32) -> (f32, f32) {
    let wave = abs_sin_wave(elapsed, GLOW_PULSE_SPEED, phase);
    (
        GLOW_SCALE_AMPLITUDE.mul_add(wave, 1.0),
        GLOW_ALPHA_AMPLITUDE.mul_add(wave, GLOW_BASE_ALPHA),
    )
}

pub fn arc_flicker_alpha(elapsed: f64, id: usize) -> f32 {
    let wave = abs_sin_wave(elapsed, ARC_FLICKER_SPEED, id.to_f32());
    ARC_FLICKER_AMPLITUDE.mul_add(wave, ARC_FLICKER_BASE_ALPHA)
}

fn pulse_marker_glow(
    time: Res<Time>,
    config: Res<GlobeConfig>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut glows: Query<(&MarkerGlow, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    let elapsed = time.elapsed_secs_f64();

    for (glow, mut transform, material) in &mut glows {
        let (scale, alpha) = glow_pulse(elapsed, glow.phase);
        transform.scale = Vec3::splat(scale);

        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = config.glow_color.with_alpha(alpha);
        }
    }
}

fn draw_arcs(
    mut gizmos: Gizmos<ArcGizmo>,
    time: Res<Time>,
    config: Res<GlobeConfig>,
    arcs: Query<(&GlobeArc, &GlobalTransform)>,
) {
    let elapsed = time.elapsed_secs_f64();

    for (arc, transform) in &arcs {
        let alpha = if config.arc_flicker {
            arc_flicker_alpha(elapsed, arc.id)
        } else {
            config.arc_opacity
        };

        gizmos.linestrip(
            arc.points.iter().map(|point| transform.transform_point(*point)),
            config.arc_color.with_alpha(alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_glow_pulse_bounds() {
        for step in 0..200 {
            let elapsed = f64::from(step) * 0.037;
            for phase in [0.0, 1.0, 7.0] {
                let (scale, alpha) = glow_pulse(elapsed, phase);
                assert!((1.0..=1.25 + EPSILON).contains(&scale));
                assert!((0.15 - EPSILON..=0.40 + EPSILON).contains(&alpha));
            }
        }
    }

    #[test]
    fn test_glow_pulse_peak_and_trough() {
        let (scale, alpha) = glow_pulse(0.0, 0.0);
        assert!((scale - 1.0).abs() < EPSILON);
        assert!((alpha - 0.15).abs() < EPSILON);

        // 2t = pi/2 puts the wave at its peak
        let (scale, alpha) = glow_pulse(FRAC_PI_2 / 2.0, 0.0);
        assert!((scale - 1.25).abs() < EPSILON);
        assert!((alpha - 0.40).abs() < EPSILON);
    }

    #[test]
    fn test_glow_phase_staggers_markers() {
        let first = glow_pulse(0.5, 0.0);
        let second = glow_pulse(0.5, 1.0);
        assert!((first.0 - second.0).abs() > EPSILON);
    }

    #[test]
    fn test_glow_keeps_pulsing_after_days_of_uptime() {
        // 10 days in: f32 seconds would step by a whole second here
        let days = 864_000.0;
        let (start, _) = glow_pulse(days, 0.0);
        let (later, _) = glow_pulse(days + 0.1, 0.0);
        assert!((start - later).abs() > 1e-3);
        assert!((1.0..=1.25 + EPSILON).contains(&later));
    }

    #[test]
    fn test_arc_flicker_varies_after_days_of_uptime() {
        let days = 864_000.0;
        let samples: Vec<f32> = (0..8)
            .map(|step| arc_flicker_alpha(days + f64::from(step) * 0.05, 3))
            .collect();
        assert!(samples.windows(2).any(|pair| (pair[0] - pair[1]).abs() > 1e-3));
        assert!(samples
            .iter()
            .all(|alpha| (0.25 - EPSILON..=0.50 + EPSILON).contains(alpha)));
    }

    #[test]
    fn test_arc_flicker_bounds_and_stability() {
        for step in 0..200 {
            let elapsed = f64::from(step) * 0.05;
            for id in 0..10 {
                let alpha = arc_flicker_alpha(elapsed, id);
                assert!((0.25 - EPSILON..=0.50 + EPSILON).contains(&alpha));
                assert_eq!(alpha, arc_flicker_alpha(elapsed, id));
            }
        }
    }

    #[test]
    fn test_arc_flicker_at_zero_depends_on_id() {
        assert!((arc_flicker_alpha(0.0, 0) - 0.25).abs() < EPSILON);
        let expected = 0.25 + 0.25 * 1.0_f32.sin().abs();
        assert!((arc_flicker_alpha(0.0, 1) - expected).abs() < EPSILON);
    }
}

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rovercam::camera::{guard_tilt, TILT_LIMIT};
use rovercam::{CameraRig, NoInput, PointerCapture, Viewport};

fn frame(rig: &mut CameraRig) {
    rig.update(&NoInput, &PointerCapture::new(), Viewport::new(800, 600));
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_pitch_stays_in_range() {
        let mut rig = CameraRig::new();
        let deltas = [0.7, 0.7, 0.7, -3.0, -0.01, 5.0, FRAC_PI_2, -FRAC_PI_2, 1e-7, -10.0];

        for delta in deltas {
            rig.pitch(delta);
            assert!(
                rig.tilt() >= -TILT_LIMIT && rig.tilt() <= TILT_LIMIT,
                "tilt {} escaped the clamp after pitch({})",
                rig.tilt(),
                delta
            );
            assert_ne!(rig.tilt(), FRAC_PI_2, "tilt must never sit on the pole");
        }
    }

    #[test]
    fn test_pitch_saturates_at_limit() {
        let mut rig = CameraRig::new();
        for _ in 0..100 {
            rig.pitch(0.1);
        }
        assert_eq!(rig.tilt(), TILT_LIMIT);
        assert!(rig.forward().is_finite(), "basis must stay finite at the limit");

        frame(&mut rig);
        assert!(rig.forward().is_finite());
        assert!((rig.forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_guard_nudges_exact_pole() {
        // Unreachable through the clamp, but the guard must still hold
        assert_ne!(guard_tilt(FRAC_PI_2), FRAC_PI_2);
    }

    #[test]
    fn test_yaw_is_additive() {
        let mut split = CameraRig::new();
        split.yaw(0.3);
        split.yaw(1.1);

        let mut once = CameraRig::new();
        once.yaw(0.3 + 1.1);

        assert_eq!(split.pan(), once.pan());
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut rig = CameraRig::new();
        for _ in 0..10 {
            rig.yaw(1.0);
        }
        assert!((rig.pan() - 10.0).abs() < 1e-5, "pan should not wrap");
    }

    #[test]
    fn test_basis_at_zero_angles() {
        let mut rig = CameraRig::new();
        frame(&mut rig);

        let forward = rig.forward();
        let right = rig.right();
        assert!((forward - Vec3::X).length() < 1e-6, "forward = {:?}", forward);
        assert!((right - Vec3::NEG_Z).length() < 1e-6, "right = {:?}", right);
        assert_eq!(rig.up(), Vec3::Y);
    }

    #[test]
    fn test_basis_follows_pan() {
        let mut rig = CameraRig::new();
        rig.yaw(FRAC_PI_2);
        frame(&mut rig);

        assert!((rig.forward() - Vec3::Z).length() < 1e-6);
        assert!((rig.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_roll_is_tracked_but_ignored() {
        let mut rig = CameraRig::new();
        rig.roll(0.4);
        frame(&mut rig);

        assert_eq!(rig.roll_angle(), 0.4);
        assert_eq!(rig.up(), Vec3::Y);
    }
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn test_friction_decays_velocity_exactly() {
        for friction in [0.0, 0.25, 0.5, 0.8, 0.99] {
            let mut rig = CameraRig::new();
            rig.set_friction(friction);
            let before = Vec3::new(1.5, -2.0, 0.75);
            rig.set_velocity(before);

            frame(&mut rig);

            assert_eq!(rig.velocity(), before * friction, "friction {}", friction);
        }
    }

    #[test]
    fn test_single_frame_with_default_friction() {
        let mut rig = CameraRig::new();
        assert_eq!(rig.friction(), 0.8);
        rig.set_velocity(Vec3::X);

        frame(&mut rig);

        assert!((rig.velocity() - Vec3::new(0.8, 0.0, 0.0)).length() < 1e-6);
        assert!((rig.position() - Vec3::new(0.8, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_velocity_decays_toward_rest() {
        let mut rig = CameraRig::new();
        rig.move_forward(1.0);
        for _ in 0..200 {
            frame(&mut rig);
        }
        assert!(rig.velocity().length() < 1e-6);
        // Geometric series: 0.8 / (1 - 0.8) = 4
        assert!((rig.position().x - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_speed_is_noop() {
        let mut rig = CameraRig::new();
        rig.set_velocity(Vec3::new(0.1, 0.2, 0.3));

        rig.move_forward(0.0);
        rig.move_lateral(0.0);
        rig.move_vertical(0.0);

        assert_eq!(rig.velocity(), Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_move_primitives_follow_basis() {
        let mut rig = CameraRig::new();
        rig.move_forward(2.0);
        assert_eq!(rig.velocity(), rig.forward() * 2.0);

        let mut rig = CameraRig::new();
        rig.move_lateral(-1.0);
        assert_eq!(rig.velocity(), rig.right() * -1.0);

        let mut rig = CameraRig::new();
        rig.move_vertical(0.5);
        assert_eq!(rig.velocity(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_nan_delta_propagates() {
        let mut rig = CameraRig::new();
        rig.move_forward(f32::NAN);
        frame(&mut rig);
        assert!(rig.position().is_nan(), "invalid input is not silently clamped");
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_unchanged_viewport_not_recomputed() {
        let mut rig = CameraRig::new();
        frame(&mut rig);
        frame(&mut rig);
        frame(&mut rig);
        assert_eq!(rig.projection_cache().recomputations(), 1);

        rig.update(&NoInput, &PointerCapture::new(), Viewport::new(1024, 768));
        assert_eq!(rig.projection_cache().recomputations(), 2);
    }

    #[test]
    fn test_fov_change_recomputes_next_frame() {
        let mut rig = CameraRig::new();
        frame(&mut rig);

        rig.adjust_field_of_view(0.2);
        assert!(rig.projection_cache().is_dirty());
        frame(&mut rig);

        assert_eq!(rig.projection_cache().recomputations(), 2);
        assert!((rig.projection().unwrap().fov_y - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_activation_forces_recompute() {
        let mut rig = CameraRig::new();
        frame(&mut rig);

        rig.set_active(false);
        frame(&mut rig);
        assert_eq!(rig.projection_cache().recomputations(), 1);

        rig.set_active(true);
        frame(&mut rig);
        assert_eq!(rig.projection_cache().recomputations(), 2);
    }

    #[test]
    fn test_zero_height_viewport() {
        let mut rig = CameraRig::new();
        rig.update(&NoInput, &PointerCapture::new(), Viewport::new(1280, 0));

        let projection = rig.projection().unwrap();
        assert!(projection.aspect.is_finite());
        assert_eq!(projection.aspect, 1280.0);
    }

    #[test]
    fn test_configured_clip_planes() {
        let mut rig = CameraRig::new();
        rig.set_clip_planes(0.1, 1000.0);
        frame(&mut rig);

        let projection = rig.projection().unwrap();
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }
}

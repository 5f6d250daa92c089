use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rovercam::camera::TILT_LIMIT;
use rovercam::{CameraRig, CameraState, NoInput, PointerCapture, Viewport};

fn frame(rig: &mut CameraRig) {
    rig.update(&NoInput, &PointerCapture::new(), Viewport::new(800, 600));
}

#[cfg(test)]
mod apply_state_tests {
    use super::*;

    #[test]
    fn test_fov_only_changes_fov() {
        let mut rig = CameraRig::new();
        rig.set_position(Vec3::new(4.0, 5.0, 6.0));
        rig.yaw(0.5);
        frame(&mut rig);
        let before = rig.state();

        rig.apply_state(&CameraState::from_json(r#"{"fov": 1.2}"#).unwrap());

        assert_eq!(rig.fov_y(), 1.2);
        assert!(rig.projection_cache().is_dirty(), "fov must invalidate the projection");
        let after = rig.state();
        assert_eq!(after.position, before.position);
        assert_eq!(after.rotation, before.rotation);
        assert_eq!(after.speed, before.speed);
        assert_eq!(after.sensitivity, before.sensitivity);
        assert_eq!(after.offset, before.offset);
        assert_eq!(after.active, before.active);
    }

    #[test]
    fn test_position_replaces() {
        let mut rig = CameraRig::new();
        rig.move_forward(1.0);
        for _ in 0..5 {
            frame(&mut rig);
        }
        assert!(rig.position().x > 0.0);

        rig.apply_state(&CameraState {
            position: Some([1.0, 2.0, 3.0]),
            ..Default::default()
        });

        assert_eq!(rig.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_goes_through_tilt_guard() {
        let mut rig = CameraRig::new();
        rig.apply_state(&CameraState {
            rotation: Some([0.25, FRAC_PI_2, 0.1]),
            ..Default::default()
        });

        assert_eq!(rig.pan(), 0.25);
        assert_eq!(rig.tilt(), TILT_LIMIT);
        assert_eq!(rig.roll_angle(), 0.1);
    }

    #[test]
    fn test_explicit_zero_values_apply() {
        let mut rig = CameraRig::new();
        rig.apply_state(&CameraState::from_json(r#"{"speed": 0.0, "sensitivity": 0.0, "controlEnabled": false}"#).unwrap());

        assert_eq!(rig.speed(), 0.0);
        assert_eq!(rig.sensitivity(), 0.0);
        assert!(!rig.is_control_enabled());
    }

    #[test]
    fn test_active_false_from_state() {
        let mut rig = CameraRig::new();
        rig.apply_state(&CameraState {
            active: Some(false),
            ..Default::default()
        });
        assert!(!rig.is_active());
    }

    #[test]
    fn test_offset_from_state() {
        let mut rig = CameraRig::new();
        rig.apply_state(&CameraState::from_json(r#"{"offset": [1.5, 0.0]}"#).unwrap());
        frame(&mut rig);

        let output = rig.render_output();
        assert_eq!(output.eye, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_empty_state_changes_nothing() {
        let mut rig = CameraRig::new();
        rig.yaw(1.0);
        let before = rig.state();

        rig.apply_state(&CameraState::default());

        assert_eq!(rig.state(), before);
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;

    #[test]
    fn test_state_export_sets_every_field() {
        let state = CameraRig::new().state();
        assert!(state.fov.is_some());
        assert!(state.active.is_some());
        assert!(state.rotation.is_some());
        assert!(state.position.is_some());
        assert!(state.offset.is_some());
        assert!(state.control_enabled.is_some());
        assert!(state.speed.is_some());
        assert!(state.sensitivity.is_some());
    }

    #[test]
    fn test_save_and_restore_through_json() {
        let mut original = CameraRig::new();
        original.yaw(0.7);
        original.pitch(-0.3);
        original.elevate(2.0);
        original.set_speed(0.4);
        original.move_forward(1.0);
        for _ in 0..3 {
            frame(&mut original);
        }

        let json = original.state().to_json().unwrap();
        let mut restored = CameraRig::new();
        restored.apply_state(&CameraState::from_json(&json).unwrap());

        assert_eq!(restored.state(), original.state());
    }

    #[test]
    fn test_state_file_round_trip() {
        let path = std::env::temp_dir().join(format!("rovercam-state-{}.json", std::process::id()));
        let state = CameraState {
            fov: Some(0.9),
            position: Some([1.0, 0.0, -1.0]),
            ..Default::default()
        };

        state.save(&path).unwrap();
        let loaded = CameraState::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("rovercam-does-not-exist.json");
        assert!(CameraState::load(&path).is_err());
    }
}

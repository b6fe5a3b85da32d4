use glam::Vec3;
use progressive_flycam::core::{Direction, InputSnapshot};
use progressive_flycam::{CameraState, ControllerSettings, FlyCamera};

#[cfg(test)]
mod rig_scenario_tests {
    use super::*;

    fn startup_rig() -> FlyCamera {
        let camera = CameraState::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 45.0);
        FlyCamera::new(camera, ControllerSettings::default())
    }

    #[test]
    fn test_forward_second_then_idle_second() {
        let mut rig = startup_rig();
        let forward = rig.camera().forward();

        // Tick 1: forward key, one second, no mouse movement
        let report = rig.tick(1.0, &InputSnapshot::new(&[Direction::Forward], (0.0, 0.0)));
        assert!(rig.camera().position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-5));
        assert!(rig.camera().forward().abs_diff_eq(forward, 1e-5));
        assert!(report.reset);
        assert_eq!(report.counters.frames_since_last_move, 0);
        let total_after_first = report.counters.total_frame_count;

        // Tick 2: nothing held, one second
        let position = rig.camera().position();
        let report = rig.tick(1.0, &InputSnapshot::idle((0.0, 0.0)));
        assert_eq!(rig.camera().position(), position);
        assert!(!report.reset);
        assert_eq!(report.counters.frames_since_last_move, 1);
        assert_eq!(report.counters.total_frame_count, total_after_first + 1);
    }

    #[test]
    fn test_zero_delta_first_tick_does_not_move() {
        let mut rig = startup_rig();
        rig.tick(0.0, &InputSnapshot::new(&Direction::ALL, (640.0, 480.0)));
        assert_eq!(rig.camera().position(), Vec3::ZERO);
    }

    #[test]
    fn test_stationary_camera_keeps_accumulating() {
        let mut rig = startup_rig();
        let idle = InputSnapshot::idle((100.0, 100.0));
        rig.tick(0.0, &idle);

        for expected in 1..=30u32 {
            let report = rig.tick(0.016, &idle);
            assert!(!report.reset);
            assert_eq!(report.counters.frames_since_last_move, expected);
        }
    }

    #[test]
    fn test_mouse_look_restarts_accumulation() {
        let mut rig = startup_rig();
        rig.tick(0.0, &InputSnapshot::idle((100.0, 100.0)));
        rig.tick(0.016, &InputSnapshot::idle((100.0, 100.0)));

        let report = rig.tick(0.016, &InputSnapshot::idle((101.0, 100.0)));
        assert!(report.reset);
        assert_eq!(report.counters.frames_since_last_move, 0);

        let report = rig.tick(0.016, &InputSnapshot::idle((101.0, 100.0)));
        assert!(!report.reset);
        assert_eq!(report.counters.frames_since_last_move, 1);
    }

    #[test]
    fn test_held_key_resets_every_tick() {
        let mut rig = startup_rig();
        let input = InputSnapshot::new(&[Direction::Left], (0.0, 0.0));
        for _ in 0..5 {
            let report = rig.tick(0.016, &input);
            assert!(report.reset);
            assert_eq!(report.counters.frames_since_last_move, 0);
        }
        assert_eq!(rig.counters().total_frame_count, 5);
    }

    #[test]
    fn test_camera_stays_orthonormal_under_erratic_input() {
        let mut rig = startup_rig();
        let mut cursor = (0.0, 0.0);
        for i in 0..500 {
            cursor.0 += ((i * 37) % 101) as f64 - 50.0;
            cursor.1 += ((i * 53) % 97) as f64 - 48.0;
            let dt = ((i % 7) as f32) * 0.01;
            let held = [Direction::ALL[i % 6]];
            rig.tick(dt, &InputSnapshot::new(&held, cursor));

            assert!(rig.camera().basis().is_orthonormal(1e-4));
            assert!(rig.controller().pitch().abs() <= 89.0);
        }
    }
}

use anyhow::{ensure, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{CameraState, DEFAULT_FOV_DEG};
use crate::cli::Cli;

pub const DEFAULT_WIDTH: u32 = 1040;
pub const DEFAULT_HEIGHT: u32 = 624;
pub const DEFAULT_TITLE: &str = "Progressive Fly Camera";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Startup camera placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub forward: [f32; 3],
    pub fov: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            forward: [0.0, 0.0, -1.0],
            fov: DEFAULT_FOV_DEG,
        }
    }
}

impl CameraSettings {
    pub fn to_camera(&self) -> CameraState {
        CameraState::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.forward),
            self.fov,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
}

impl Settings {
    /// Read settings from a JSON file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text).context("Malformed settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// File settings (if any) with command-line overrides applied
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(width) = cli.width {
            settings.window.width = width;
        }
        if let Some(height) = cli.height {
            settings.window.height = height;
        }
        if let Some(fov) = cli.fov {
            settings.camera.fov = fov;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "Window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            self.camera.fov.is_finite() && self.camera.fov > 0.0 && self.camera.fov < 180.0,
            "Field of view must be between 0 and 180 degrees, got {}",
            self.camera.fov
        );
        ensure!(
            self.camera.position.iter().all(|c| c.is_finite()),
            "Camera position must be finite, got {:?}",
            self.camera.position
        );
        let forward = Vec3::from_array(self.camera.forward);
        ensure!(
            forward.is_finite() && forward.length_squared() > 0.0,
            "Camera forward must be a non-zero finite vector, got {:?}",
            self.camera.forward
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_scene() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 1040);
        assert_eq!(settings.window.height, 624);
        assert_eq!(settings.camera.fov, 45.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "camera": { "fov": 60 } }"#).unwrap();
        assert_eq!(settings.camera.fov, 60.0);
        assert_eq!(settings.camera.forward, [0.0, 0.0, -1.0]);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn rejects_control_tuning_section() {
        let err = Settings::from_json(r#"{ "controls": { "base_speed": 5.0 } }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("controls"));
    }

    #[test]
    fn rejects_zero_forward() {
        let err = Settings::from_json(r#"{ "camera": { "forward": [0, 0, 0] } }"#).unwrap_err();
        assert!(err.to_string().contains("forward"));
    }

    #[test]
    fn rejects_bad_fov() {
        assert!(Settings::from_json(r#"{ "camera": { "fov": 180 } }"#).is_err());
        assert!(Settings::from_json(r#"{ "camera": { "fov": 0 } }"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli {
            width: Some(640),
            fov: Some(70.0),
            ..Default::default()
        };
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, DEFAULT_HEIGHT);
        assert_eq!(settings.camera.fov, 70.0);
    }

    #[test]
    fn cli_override_is_validated() {
        let cli = Cli {
            fov: Some(-1.0),
            ..Default::default()
        };
        assert!(Settings::from_cli(&cli).is_err());
    }

    #[test]
    fn camera_settings_build_orthonormal_camera() {
        let settings = CameraSettings {
            position: [1.0, 2.0, 3.0],
            forward: [1.0, 0.0, 1.0],
            fov: 60.0,
        };
        let camera = settings.to_camera();
        assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
        assert!(camera.basis().is_orthonormal(1e-5));
    }
}

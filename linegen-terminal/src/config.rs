/// Startup configuration loaded from a TOML file
use std::path::Path;
use std::time::Duration;

use linegen_core::{
    BoxSpec, DropScene, LineStyle, Orientation, PhysicsParams, PinholeCamera, PlatformSpec,
    ShapeKind, ShapeScene,
};
use nalgebra::Point2;
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub shape: ShapeConfig,
    pub falling_box: BoxConfig,
    pub platform: PlatformConfig,
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
}

/// Tunables for the single-shape scene
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub size: f32,
    pub position: [f32; 2],
    pub z: f32,
    pub rotation: [f32; 3],
    pub color: [u8; 3],
    pub segments: u32,
    pub lat_segments: u32,
    pub lon_segments: u32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            size: 2.0,
            position: [0.0, 0.0],
            z: 0.0,
            rotation: [0.0, 0.0, 0.0],
            color: [0, 255, 255],
            segments: 32,
            lat_segments: 16,
            lon_segments: 16,
        }
    }
}

/// The falling collision body
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub size: f32,
    pub position: [f32; 2],
    pub z: f32,
    pub color: [u8; 3],
    pub contact_color: [u8; 3],
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            position: [0.0, 5.0],
            z: 0.0,
            color: [255, 255, 255],
            contact_color: [255, 64, 64],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub position: [f32; 2],
    pub z: f32,
    pub color: [u8; 3],
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 1.0,
            depth: 2.0,
            position: [0.0, -3.0],
            z: 0.0,
            color: [160, 160, 160],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub initial_velocity: f32,
    pub jump_height: f32,
    pub bounce_delay_secs: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            initial_velocity: 0.0,
            jump_height: 5.0,
            bounce_delay_secs: 2.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub focal_length: f32,
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            focal_length: 10.0,
            zoom: 3.0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn pinhole_camera(&self) -> PinholeCamera {
        PinholeCamera::new(self.camera.focal_length)
    }

    pub fn shape_scene(&self, kind: ShapeKind) -> ShapeScene {
        let shape = &self.shape;
        ShapeScene {
            kind,
            size: shape.size,
            position: Point2::new(shape.position[0], shape.position[1]),
            z: shape.z,
            orientation: Orientation::new(shape.rotation[0], shape.rotation[1], shape.rotation[2]),
            style: Some(style(shape.color)),
            segments: shape.segments,
            lat_segments: shape.lat_segments,
            lon_segments: shape.lon_segments,
        }
    }

    pub fn drop_scene(&self) -> DropScene {
        let falling = BoxSpec {
            center: Point2::new(self.falling_box.position[0], self.falling_box.position[1]),
            z: self.falling_box.z,
            size: self.falling_box.size,
            style: Some(style(self.falling_box.color)),
        };
        let platform = PlatformSpec {
            center: Point2::new(self.platform.position[0], self.platform.position[1]),
            z: self.platform.z,
            width: self.platform.width,
            height: self.platform.height,
            depth: self.platform.depth,
            style: Some(style(self.platform.color)),
        };
        let params = PhysicsParams {
            gravity: self.physics.gravity,
            initial_velocity: self.physics.initial_velocity,
            jump_height: self.physics.jump_height,
            bounce_delay: Duration::from_secs_f32(self.physics.bounce_delay_secs),
        };

        DropScene::new(
            falling,
            Some(style(self.falling_box.contact_color)),
            platform,
            params,
        )
    }
}

fn style(color: [u8; 3]) -> LineStyle {
    LineStyle::new(color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = Config::default();
        assert_eq!(config.falling_box.size, 1.0);
        assert_eq!(config.platform.width, 10.0);
        assert_eq!(config.platform.position, [0.0, -3.0]);
        assert_eq!(config.physics.gravity, -9.8);
        assert_eq!(config.physics.jump_height, 5.0);
        assert_eq!(config.physics.bounce_delay_secs, 2.5);
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let config: Config = toml::from_str(
            r#"
            [physics]
            gravity = -3.7

            [shape]
            size = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(config.physics.gravity, -3.7);
        assert_eq!(config.shape.size, 4.0);
        // untouched sections keep their defaults
        assert_eq!(config.physics.jump_height, 5.0);
        assert_eq!(config.platform.depth, 2.0);
    }

    #[test]
    fn test_scene_builders_use_config_values() {
        let config = Config::default();

        let scene = config.shape_scene(ShapeKind::Cube);
        assert_eq!(scene.size, 2.0);
        assert!(scene.style.is_some());

        let drop = config.drop_scene();
        assert_eq!(drop.position(), Point2::new(0.0, 5.0));
        assert_eq!(drop.velocity(), 0.0);
    }
}

// src/config.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{check_capacity, check_depth, check_point_count};

/// Which program the binary runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    #[default]
    ChaosTriangle,
    TriangleGasket,
    ChaosTetrahedron,
    ChaosTetrahedronColored,
    TetrahedronGasket,
    PointSquare,
    RectangleCad,
    PolygonCad,
    RotatingSquare,
    RotatingSquareControls,
    ColorCube,
    IndexedCube,
}

impl DemoKind {
    pub fn title(self) -> &'static str {
        match self {
            DemoKind::ChaosTriangle => "Sierpinski Gasket (chaos game)",
            DemoKind::TriangleGasket => "Sierpinski Gasket (subdivision)",
            DemoKind::ChaosTetrahedron => "3D Gasket (chaos game)",
            DemoKind::ChaosTetrahedronColored => "3D Gasket (colored points)",
            DemoKind::TetrahedronGasket => "3D Gasket (subdivision)",
            DemoKind::PointSquare => "Points",
            DemoKind::RectangleCad => "CAD (rectangles)",
            DemoKind::PolygonCad => "CAD (polygons)",
            DemoKind::RotatingSquare => "Rotating Square",
            DemoKind::RotatingSquareControls => "Rotating Square (controls)",
            DemoKind::ColorCube => "Color Cube",
            DemoKind::IndexedCube => "Color Cube (indexed)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Falls back to the demo's own title.
    pub title: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            title: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub subdivision_depth: u32,
    pub tetra_depth: u32,
    pub point_count: usize,
    /// Fixed seed for the chaos game; a fresh one is drawn when unset.
    pub rng_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            subdivision_depth: 5,
            tetra_depth: 3,
            point_count: 5000,
            rng_seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadConfig {
    pub rectangle_capacity: usize,
    pub polygon_capacity: usize,
    pub square_capacity: usize,
}

impl Default for CadConfig {
    fn default() -> Self {
        Self {
            rectangle_capacity: 3 * 200,
            polygon_capacity: 200,
            square_capacity: 3 * 200,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub demo: DemoKind,
    pub window: WindowConfig,
    pub generation: GenerationConfig,
    pub cad: CadConfig,
    /// env_logger filter, e.g. "info" or "fractal_demos=debug,wgpu=warn".
    pub log_filter: Option<String>,
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_depth(self.generation.subdivision_depth)?;
        check_depth(self.generation.tetra_depth)?;
        check_point_count(self.generation.point_count)?;
        check_capacity(self.cad.rectangle_capacity)?;
        check_capacity(self.cad.polygon_capacity)?;
        check_capacity(self.cad.square_capacity)?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(GeometryError::InvalidInput(format!(
                "window size {}x{} is empty",
                self.window.width, self.window.height
            ))
            .into());
        }
        Ok(())
    }

    pub fn window_title(&self) -> &str {
        self.window.title.as_deref().unwrap_or(self.demo.title())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.window.width, 512);
        assert_eq!(config.generation.point_count, 5000);
        assert_eq!(config.cad.polygon_capacity, 200);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            demo = "tetrahedron-gasket"
            log_filter = "debug"

            [generation]
            tetra_depth = 4
            rng_seed = 17
            "#,
        )
        .unwrap();
        assert_eq!(config.demo, DemoKind::TetrahedronGasket);
        assert_eq!(config.generation.tetra_depth, 4);
        assert_eq!(config.generation.subdivision_depth, 5);
        assert_eq!(config.generation.rng_seed, Some(17));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.window_title(), "3D Gasket (subdivision)");
    }

    #[test]
    fn unknown_demo_is_a_parse_error() {
        let err = DemoConfig::from_toml_str(r#"demo = "teapot""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn oversized_depth_is_rejected() {
        let err = DemoConfig::from_toml_str("[generation]\nsubdivision_depth = 40").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GeometryError::InvalidInput(_))));
    }

    #[test]
    fn oversized_counts_and_capacities_are_rejected() {
        for text in [
            "[cad]\npolygon_capacity = 9223372036854775807\n[generation]\npoint_count = 9223372036854775807",
            "[generation]\npoint_count = 16777217",
            "[cad]\nrectangle_capacity = 1048577",
            "[cad]\nsquare_capacity = 9223372036854775807",
        ] {
            let err = DemoConfig::from_toml_str(text).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid(GeometryError::InvalidInput(_))),
                "{:?} accepted",
                text
            );
        }
    }

    #[test]
    fn limits_themselves_are_accepted() {
        let config =
            DemoConfig::from_toml_str("[cad]\npolygon_capacity = 1048576\n[generation]\npoint_count = 16777216").unwrap();
        assert_eq!(config.cad.polygon_capacity, crate::geometry::MAX_BUFFER_CAPACITY);
        assert_eq!(config.generation.point_count, crate::geometry::MAX_POINT_COUNT);
    }

    #[test]
    fn serialized_config_loads_back() {
        let mut config = DemoConfig::default();
        config.demo = DemoKind::PolygonCad;
        config.window.title = Some("cad".to_string());
        let text = config.to_toml_string().unwrap();
        assert_eq!(DemoConfig::from_toml_str(&text).unwrap(), config);
    }
}

// src/demos/mod.rs

pub mod cad;
pub mod cube;
pub mod gasket;
pub mod rotating;

use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fractal_demos::config::{DemoConfig, DemoKind};
use fractal_demos::input::InputEvent;
use fractal_demos::vertex::MeshSink;
use fractal_demos::GeometryResult;

pub use cad::{CadDemo, CadMode};
pub use cube::CubeDemo;
pub use rotating::RotatingSquareDemo;

pub const WHITE_BACKGROUND: wgpu::Color = wgpu::Color::WHITE;

/// One example program. The host owns the window and GPU and forwards input,
/// frame ticks and UI to the active demo.
pub trait Demo {
    fn handle_input(&mut self, _event: &InputEvent) -> GeometryResult<()> {
        Ok(())
    }

    fn update(&mut self, _dt: f32) {}

    /// Pushes geometry to the GPU if it changed since the last call.
    fn upload(&mut self, sink: &mut dyn MeshSink);

    fn transform(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn clear_color(&self) -> wgpu::Color {
        WHITE_BACKGROUND
    }

    fn has_controls(&self) -> bool {
        false
    }

    fn controls(&mut self, _ui: &mut egui::Ui) {}
}

fn demo_rng(config: &DemoConfig) -> StdRng {
    match config.generation.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn create_demo(config: &DemoConfig) -> GeometryResult<Box<dyn Demo>> {
    let generation = &config.generation;
    let demo: Box<dyn Demo> = match config.demo {
        DemoKind::ChaosTriangle => Box::new(gasket::chaos_triangle(generation.point_count, &mut demo_rng(config))?),
        DemoKind::TriangleGasket => Box::new(gasket::triangle_gasket(generation.subdivision_depth)?),
        DemoKind::ChaosTetrahedron => {
            Box::new(gasket::chaos_tetrahedron(generation.point_count, &mut demo_rng(config))?)
        }
        DemoKind::ChaosTetrahedronColored => Box::new(gasket::chaos_tetrahedron_colored(
            generation.point_count,
            &mut demo_rng(config),
        )?),
        DemoKind::TetrahedronGasket => Box::new(gasket::tetrahedron_gasket(generation.tetra_depth)?),
        DemoKind::PointSquare => Box::new(CadDemo::new(CadMode::Points, config.cad.square_capacity)?),
        DemoKind::RectangleCad => Box::new(CadDemo::new(CadMode::Rectangles, config.cad.rectangle_capacity)?),
        DemoKind::PolygonCad => Box::new(CadDemo::new(CadMode::Polygons, config.cad.polygon_capacity)?),
        DemoKind::RotatingSquare => Box::new(RotatingSquareDemo::new(false)),
        DemoKind::RotatingSquareControls => Box::new(RotatingSquareDemo::new(true)),
        DemoKind::ColorCube => Box::new(CubeDemo::color()?),
        DemoKind::IndexedCube => Box::new(CubeDemo::indexed()?),
    };
    log::info!("created demo '{}'", config.demo.title());
    Ok(demo)
}

// src/demos/cube.rs

use glam::{Mat4, Vec3};

use fractal_demos::input::{InputEvent, Key};
use fractal_demos::palette::BLACK;
use fractal_demos::shapes::{color_cube, indexed_cube};
use fractal_demos::vertex::{BufferUsage, Mesh, MeshSink, Topology};
use fractal_demos::{GeometryResult, Palette};

use super::Demo;

/// Degrees per frame at 60 frames per second.
pub const DEGREES_PER_FRAME: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A spinning cube. Angles are kept per axis in degrees and only the
/// selected axis advances.
pub struct CubeDemo {
    mesh: Mesh,
    uploaded: bool,
    theta: Vec3,
    axis: Axis,
}

impl CubeDemo {
    fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            uploaded: false,
            theta: Vec3::ZERO,
            axis: Axis::X,
        }
    }

    /// 36 unshared vertices with one solid color per face.
    pub fn color() -> GeometryResult<Self> {
        let buffer = color_cube(&Palette::CUBE)?;
        Ok(Self::new(Mesh::from_buffer(&buffer, Topology::Triangles, BLACK)))
    }

    /// Eight shared corners; colors blend across faces.
    pub fn indexed() -> GeometryResult<Self> {
        let (buffer, indices) = indexed_cube(&Palette::CUBE)?;
        Ok(Self::new(
            Mesh::from_buffer(&buffer, Topology::Triangles, BLACK).with_indices(indices),
        ))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn theta(&self) -> Vec3 {
        self.theta
    }

    pub fn select_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }
}

impl Demo for CubeDemo {
    fn handle_input(&mut self, event: &InputEvent) -> GeometryResult<()> {
        match event {
            InputEvent::KeyPressed(Key::X) => self.select_axis(Axis::X),
            InputEvent::KeyPressed(Key::Y) => self.select_axis(Axis::Y),
            InputEvent::KeyPressed(Key::Z) => self.select_axis(Axis::Z),
            _ => {}
        }
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        self.theta[self.axis.index()] += DEGREES_PER_FRAME * dt * 60.0;
    }

    fn upload(&mut self, sink: &mut dyn MeshSink) {
        if !self.uploaded {
            sink.upload(&self.mesh, BufferUsage::StaticDraw);
            self.uploaded = true;
        }
    }

    fn transform(&self) -> Mat4 {
        let radians = Vec3::new(
            self.theta.x.to_radians(),
            self.theta.y.to_radians(),
            self.theta.z.to_radians(),
        );
        Mat4::from_rotation_z(radians.z) * Mat4::from_rotation_y(radians.y) * Mat4::from_rotation_x(radians.x)
    }

    fn has_controls(&self) -> bool {
        true
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Rotate X").clicked() {
            self.select_axis(Axis::X);
        }
        if ui.button("Rotate Y").clicked() {
            self.select_axis(Axis::Y);
        }
        if ui.button("Rotate Z").clicked() {
            self.select_axis(Axis::Z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn only_selected_axis_advances() {
        let mut demo = CubeDemo::color().unwrap();
        demo.update(1.0 / 60.0);
        demo.handle_input(&InputEvent::KeyPressed(Key::Z)).unwrap();
        assert_eq!(demo.axis(), Axis::Z);
        demo.update(1.0 / 60.0);
        demo.update(1.0 / 60.0);

        let theta = demo.theta();
        assert_relative_eq!(theta.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(theta.y, 0.0);
        assert_relative_eq!(theta.z, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn cube_meshes() {
        let color = CubeDemo::color().unwrap();
        assert_eq!(color.mesh.draw_count(), 36);
        assert!(!color.mesh.is_indexed());

        let indexed = CubeDemo::indexed().unwrap();
        assert_eq!(indexed.mesh.vertices.len(), 8);
        assert_eq!(indexed.mesh.draw_count(), 36);
    }

    #[test]
    fn quarter_turn_about_z() {
        let mut demo = CubeDemo::indexed().unwrap();
        demo.select_axis(Axis::Z);
        for _ in 0..45 {
            demo.update(1.0 / 60.0);
        }
        let p = demo.transform().transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-4);
    }
}

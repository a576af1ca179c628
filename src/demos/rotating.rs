// src/demos/rotating.rs

use glam::Mat4;
use log::debug;

use fractal_demos::input::{InputEvent, Key};
use fractal_demos::palette::BLACK;
use fractal_demos::shapes::square_strip;
use fractal_demos::vertex::{BufferUsage, Mesh, MeshSink, Topology};
use fractal_demos::GeometryResult;

use super::Demo;

/// Radians per frame at 60 frames per second.
pub const BASE_STEP: f32 = 0.1;
pub const SPEED_MULTIPLIER: f32 = 1.5;

pub struct RotatingSquareDemo {
    mesh: Mesh,
    uploaded: bool,
    with_controls: bool,
    theta: f32,
    forward: bool,
    speed_factor: f32,
}

impl RotatingSquareDemo {
    pub fn new(with_controls: bool) -> Self {
        Self {
            mesh: Mesh::from_buffer(&square_strip(), Topology::TriangleStrip, BLACK),
            uploaded: false,
            with_controls,
            theta: 0.0,
            forward: true,
            speed_factor: 1.0,
        }
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn toggle_direction(&mut self) {
        self.forward = !self.forward;
        debug!("rotation direction: {}", if self.forward { "forward" } else { "reverse" });
    }

    pub fn spin_faster(&mut self) {
        self.speed_factor *= SPEED_MULTIPLIER;
    }

    pub fn spin_slower(&mut self) {
        self.speed_factor /= SPEED_MULTIPLIER;
    }

    fn step(&self) -> f32 {
        let step = BASE_STEP * self.speed_factor;
        if self.forward {
            step
        } else {
            -step
        }
    }
}

impl Demo for RotatingSquareDemo {
    fn handle_input(&mut self, event: &InputEvent) -> GeometryResult<()> {
        if !self.with_controls {
            return Ok(());
        }
        match event {
            InputEvent::KeyPressed(Key::Digit1) => self.toggle_direction(),
            InputEvent::KeyPressed(Key::Digit2) => self.spin_faster(),
            InputEvent::KeyPressed(Key::Digit3) => self.spin_slower(),
            _ => {}
        }
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        self.theta += self.step() * dt * 60.0;
    }

    fn upload(&mut self, sink: &mut dyn MeshSink) {
        if !self.uploaded {
            sink.upload(&self.mesh, BufferUsage::StaticDraw);
            self.uploaded = true;
        }
    }

    fn transform(&self) -> Mat4 {
        Mat4::from_rotation_z(self.theta)
    }

    fn has_controls(&self) -> bool {
        self.with_controls
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Change Rotation Direction").clicked() {
            self.toggle_direction();
        }
        ui.horizontal(|ui| {
            if ui.button("Spin Faster").clicked() {
                self.spin_faster();
            }
            if ui.button("Spin Slower").clicked() {
                self.spin_slower();
            }
        });
        ui.label(format!("Speed: x{:.2}", self.speed_factor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn advances_one_step_per_frame() {
        let mut demo = RotatingSquareDemo::new(false);
        demo.update(FRAME);
        demo.update(FRAME);
        assert_relative_eq!(demo.theta(), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn keys_ignored_without_controls() {
        let mut demo = RotatingSquareDemo::new(false);
        demo.handle_input(&InputEvent::KeyPressed(Key::Digit1)).unwrap();
        demo.update(FRAME);
        assert!(demo.theta() > 0.0);
    }

    #[test]
    fn keys_change_direction_and_speed() {
        let mut demo = RotatingSquareDemo::new(true);
        demo.handle_input(&InputEvent::KeyPressed(Key::Digit1)).unwrap();
        demo.update(FRAME);
        assert_relative_eq!(demo.theta(), -0.1, epsilon = 1e-6);

        demo.handle_input(&InputEvent::KeyPressed(Key::Digit2)).unwrap();
        demo.update(FRAME);
        assert_relative_eq!(demo.theta(), -0.25, epsilon = 1e-6);

        demo.handle_input(&InputEvent::KeyPressed(Key::Digit3)).unwrap();
        demo.update(FRAME);
        assert_relative_eq!(demo.theta(), -0.35, epsilon = 1e-6);
    }

    #[test]
    fn square_is_a_four_vertex_strip() {
        let demo = RotatingSquareDemo::new(false);
        assert_eq!(demo.mesh.vertices.len(), 4);
        assert_eq!(demo.mesh.topology, Topology::TriangleStrip);
    }
}

// src/demos/cad.rs

use log::{debug, trace};

use fractal_demos::input::InputEvent;
use fractal_demos::polygon_builder::fan_indices;
use fractal_demos::vertex::{BufferUsage, Mesh, MeshSink, Topology, Vertex};
use fractal_demos::{GeometryResult, Palette, PolygonBuilder};

use super::Demo;

/// What a click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CadMode {
    /// One point per click, colors cycling through the palette.
    Points,
    /// Two clicks span an axis-aligned rectangle.
    Rectangles,
    /// Clicks extend the current polygon until "End Polygon".
    Polygons,
}

pub struct CadDemo {
    mode: CadMode,
    palette: Palette,
    builder: PolygonBuilder,
    color_index: usize,
    dirty: bool,
}

impl CadDemo {
    pub fn new(mode: CadMode, capacity: usize) -> GeometryResult<Self> {
        Ok(Self {
            mode,
            palette: Palette::CAD,
            builder: PolygonBuilder::new(capacity)?,
            color_index: 0,
            dirty: true,
        })
    }

    pub fn builder(&self) -> &PolygonBuilder {
        &self.builder
    }

    pub fn select_color(&mut self, index: usize) -> GeometryResult<()> {
        self.palette.get(index)?;
        self.color_index = index;
        Ok(())
    }

    pub fn end_polygon(&mut self) {
        let record = self.builder.close_polygon();
        debug!("polygon ended with {} vertices", record.count);
        self.dirty = true;
    }

    fn click(&mut self, point: fractal_demos::Point2) -> GeometryResult<()> {
        match self.mode {
            CadMode::Points => {
                let color = self.palette.cycled(self.builder.len())?;
                self.builder.add_vertex(point, color)?;
            }
            CadMode::Rectangles => {
                let color = self.palette.get(self.color_index)?;
                if self.builder.place_corner(point, color)?.is_some() {
                    self.builder.close_polygon();
                }
            }
            CadMode::Polygons => {
                let color = self.palette.get(self.color_index)?;
                self.builder.add_vertex(point, color)?;
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Points mode draws every vertex. The polygon modes draw closed
    /// polygons only, each as a fan.
    pub fn build_mesh(&self) -> Mesh {
        let vertices = self
            .builder
            .vertices()
            .map(|(position, color)| Vertex::new([position.x, position.y, 0.0], color))
            .collect();

        match self.mode {
            CadMode::Points => Mesh {
                vertices,
                indices: None,
                topology: Topology::Points,
            },
            CadMode::Rectangles | CadMode::Polygons => {
                let mut indices = Vec::new();
                for record in self.builder.closed_polygons() {
                    fan_indices(*record, &mut indices);
                }
                Mesh {
                    vertices,
                    indices: Some(indices),
                    topology: Topology::Triangles,
                }
            }
        }
    }
}

impl Demo for CadDemo {
    fn handle_input(&mut self, event: &InputEvent) -> GeometryResult<()> {
        match event.click_position() {
            Some(position) => {
                let point = position?;
                trace!("click at ndc ({}, {})", point.x, point.y);
                self.click(point)
            }
            None => Ok(()),
        }
    }

    fn upload(&mut self, sink: &mut dyn MeshSink) {
        if self.dirty {
            sink.upload(&self.build_mesh(), BufferUsage::DynamicDraw);
            self.dirty = false;
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        match self.mode {
            CadMode::Points => wgpu::Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 },
            CadMode::Rectangles | CadMode::Polygons => wgpu::Color { r: 0.8, g: 0.8, b: 0.8, a: 1.0 },
        }
    }

    fn has_controls(&self) -> bool {
        self.mode != CadMode::Points
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Color");
        crate::ui::palette_list(ui, &self.palette, &mut self.color_index);

        if self.mode == CadMode::Polygons && ui.button("End Polygon").clicked() {
            self.end_polygon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::RecordingSink;
    use super::*;
    use fractal_demos::coords::Viewport;
    use fractal_demos::palette::{BLACK, GREEN, RED};
    use fractal_demos::GeometryError;

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerClick {
            x,
            y,
            viewport: Viewport::new(512.0, 512.0),
        }
    }

    #[test]
    fn point_colors_cycle_through_palette() {
        let mut demo = CadDemo::new(CadMode::Points, 20).unwrap();
        for _ in 0..8 {
            demo.handle_input(&click(256.0, 256.0)).unwrap();
        }
        let colors = demo.builder().colors();
        assert_eq!(colors[0], BLACK);
        assert_eq!(colors[1], RED);
        assert_eq!(colors[7], BLACK);
    }

    #[test]
    fn rectangle_needs_two_clicks() {
        let mut demo = CadDemo::new(CadMode::Rectangles, 600).unwrap();
        demo.select_color(3).unwrap();
        demo.handle_input(&click(0.0, 512.0)).unwrap();
        assert!(demo.builder().is_empty());
        demo.handle_input(&click(512.0, 0.0)).unwrap();

        let positions = demo.builder().positions();
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[0].to_array(), [-1.0, -1.0]);
        assert_eq!(positions[2].to_array(), [1.0, 1.0]);
        assert_eq!(demo.builder().colors()[0], GREEN);

        let mesh = demo.build_mesh();
        assert_eq!(mesh.indices, Some(vec![0, 1, 2, 0, 2, 3]));
    }

    #[test]
    fn open_polygon_is_not_drawn() {
        let mut demo = CadDemo::new(CadMode::Polygons, 200).unwrap();
        demo.select_color(1).unwrap();
        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
            demo.handle_input(&click(x, y)).unwrap();
        }
        assert_eq!(demo.build_mesh().draw_count(), 0);

        demo.end_polygon();
        let mesh = demo.build_mesh();
        assert_eq!(mesh.draw_count(), 3);
        assert_eq!(mesh.vertices[0].color, RED);
    }

    #[test]
    fn full_builder_reports_capacity() {
        let mut demo = CadDemo::new(CadMode::Rectangles, 6).unwrap();
        demo.handle_input(&click(0.0, 0.0)).unwrap();
        demo.handle_input(&click(10.0, 10.0)).unwrap();
        demo.handle_input(&click(20.0, 20.0)).unwrap();
        let err = demo.handle_input(&click(30.0, 30.0)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::CapacityExceeded {
                requested: 4,
                available: 2,
                capacity: 6
            }
        );
        assert_eq!(demo.builder().len(), 4);
    }

    #[test]
    fn uploads_only_after_changes() {
        let mut demo = CadDemo::new(CadMode::Polygons, 10).unwrap();
        let mut sink = RecordingSink::default();
        demo.upload(&mut sink);
        demo.upload(&mut sink);
        assert_eq!(sink.uploads.len(), 1);

        demo.handle_input(&click(1.0, 1.0)).unwrap();
        demo.upload(&mut sink);
        assert_eq!(sink.uploads.len(), 2);
        assert_eq!(sink.uploads[1].1, BufferUsage::DynamicDraw);
    }

    #[test]
    fn unknown_color_is_rejected() {
        let mut demo = CadDemo::new(CadMode::Polygons, 10).unwrap();
        assert!(demo.select_color(7).is_err());
    }

    #[test]
    fn oversized_capacity_fails_before_allocating() {
        let result = CadDemo::new(CadMode::Points, usize::MAX / 2);
        assert!(matches!(result, Err(GeometryError::InvalidInput(_))));
    }
}

// src/coords.rs

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Point2;

/// Window size in pixels, as reported with the input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Window pixels (origin top-left, y down) to normalized device
    /// coordinates (origin center, y up, both axes in [-1, 1]).
    pub fn to_ndc(&self, x: f32, y: f32) -> GeometryResult<Point2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(GeometryError::invalid(format!(
                "cannot map into a {}x{} window",
                self.width, self.height
            )));
        }
        Ok(Point2::new(
            2.0 * x / self.width - 1.0,
            2.0 * (self.height - y) / self.height - 1.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center() {
        let viewport = Viewport::new(512.0, 256.0);
        assert_eq!(viewport.to_ndc(0.0, 0.0).unwrap(), Point2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(512.0, 256.0).unwrap(), Point2::new(1.0, -1.0));
        assert_eq!(viewport.to_ndc(256.0, 128.0).unwrap(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn y_is_flipped() {
        let viewport = Viewport::new(100.0, 100.0);
        let upper = viewport.to_ndc(50.0, 10.0).unwrap();
        let lower = viewport.to_ndc(50.0, 90.0).unwrap();
        assert!(upper.y > lower.y);
    }

    #[test]
    fn degenerate_window_is_rejected() {
        assert!(matches!(
            Viewport::new(0.0, 100.0).to_ndc(1.0, 1.0),
            Err(GeometryError::InvalidInput(_))
        ));
    }
}

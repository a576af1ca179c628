// src/input.rs

use crate::coords::Viewport;
use crate::error::GeometryResult;
use crate::geometry::Point2;

/// Keys the demos react to. Everything else is dropped by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Digit1,
    Digit2,
    Digit3,
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at a window-pixel position.
    PointerClick { x: f32, y: f32, viewport: Viewport },
    KeyPressed(Key),
}

impl InputEvent {
    /// The click position in normalized device coordinates, if this is a
    /// click.
    pub fn click_position(&self) -> Option<GeometryResult<Point2>> {
        match *self {
            InputEvent::PointerClick { x, y, viewport } => Some(viewport.to_ndc(x, y)),
            InputEvent::KeyPressed(_) => None,
        }
    }
}

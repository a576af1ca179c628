// src/polygon_builder.rs

use std::ops::Range;

use log::trace;

use crate::buffer::GeometryBuffer;
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{check_capacity, rectangle_fan, Point2};
use crate::palette::Color;

/// A contiguous run of vertices drawn as one triangle fan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolygonRecord {
    pub start: usize,
    pub count: usize,
}

impl PolygonRecord {
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Progress of the two-click rectangle tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerState {
    AwaitingFirstCorner,
    AwaitingSecondCorner(Point2),
}

/// Fixed-capacity vertex/color store that collects clicked points into
/// polygons laid out back to back.
#[derive(Clone, Debug)]
pub struct PolygonBuilder {
    capacity: usize,
    buffer: GeometryBuffer<Point2>,
    closed: Vec<PolygonRecord>,
    current_start: usize,
    corner_state: CornerState,
}

impl PolygonBuilder {
    /// Fails with `InvalidInput` when `capacity` exceeds
    /// [`MAX_BUFFER_CAPACITY`](crate::geometry::MAX_BUFFER_CAPACITY).
    pub fn new(capacity: usize) -> GeometryResult<Self> {
        check_capacity(capacity)?;
        Ok(Self {
            capacity,
            buffer: GeometryBuffer::with_colored_capacity(capacity),
            closed: Vec::new(),
            current_start: 0,
            corner_state: CornerState::AwaitingFirstCorner,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buffer.len()
    }

    pub fn positions(&self) -> &[Point2] {
        self.buffer.positions()
    }

    pub fn colors(&self) -> &[Color] {
        self.buffer.colors().unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = (Point2, Color)> + '_ {
        self.positions().iter().copied().zip(self.colors().iter().copied())
    }

    pub fn closed_polygons(&self) -> &[PolygonRecord] {
        &self.closed
    }

    /// The polygon still being built; it is not part of `closed_polygons`.
    pub fn current_polygon(&self) -> PolygonRecord {
        PolygonRecord {
            start: self.current_start,
            count: self.buffer.len() - self.current_start,
        }
    }

    pub fn corner_state(&self) -> CornerState {
        self.corner_state
    }

    /// Appends one vertex to the current polygon and returns its slot.
    pub fn add_vertex(&mut self, position: Point2, color: Color) -> GeometryResult<usize> {
        self.ensure_room(1)?;
        let slot = self.buffer.len();
        self.buffer.push_colored(position, color);
        trace!("vertex {} at ({}, {})", slot, position.x, position.y);
        Ok(slot)
    }

    /// Freezes the current polygon and starts the next one right after it.
    /// An empty current polygon still produces a (zero-length) record.
    pub fn close_polygon(&mut self) -> PolygonRecord {
        let record = self.current_polygon();
        self.closed.push(record);
        self.current_start = self.buffer.len();
        trace!("closed polygon {:?}", record);
        record
    }

    /// Appends the four corners of the rectangle spanned by two diagonal
    /// corners, all with `color`. Either all four land or none do.
    pub fn quad_from_two_corners(
        &mut self,
        corner1: Point2,
        corner2: Point2,
        color: Color,
    ) -> GeometryResult<[Point2; 4]> {
        self.ensure_room(4)?;
        let corners = rectangle_fan(corner1, corner2);
        for corner in corners {
            self.buffer.push_colored(corner, color);
        }
        trace!("quad {:?}", corners);
        Ok(corners)
    }

    /// Feeds one click to the rectangle tool. The first click only records
    /// the corner; the second emits the quad. Either way the tool is ready
    /// for a new first corner after the second click.
    pub fn place_corner(&mut self, point: Point2, color: Color) -> GeometryResult<Option<[Point2; 4]>> {
        match self.corner_state {
            CornerState::AwaitingFirstCorner => {
                self.corner_state = CornerState::AwaitingSecondCorner(point);
                Ok(None)
            }
            CornerState::AwaitingSecondCorner(first) => {
                self.corner_state = CornerState::AwaitingFirstCorner;
                self.quad_from_two_corners(first, point, color).map(Some)
            }
        }
    }

    fn ensure_room(&self, requested: usize) -> GeometryResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(GeometryError::CapacityExceeded {
                requested,
                available,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

/// Triangle-list indices for a fan over `record`. Fewer than three vertices
/// yield nothing.
///
/// Records from a [`PolygonBuilder`] end at or below `MAX_BUFFER_CAPACITY`,
/// which fits in `u32`.
pub fn fan_indices(record: PolygonRecord, out: &mut Vec<u32>) {
    if record.count < 3 {
        return;
    }
    debug_assert!(u32::try_from(record.end()).is_ok(), "polygon record {:?} past u32 indices", record);
    let start = record.start as u32;
    for i in 1..(record.count as u32 - 1) {
        out.push(start);
        out.push(start + i);
        out.push(start + i + 1);
    }
}

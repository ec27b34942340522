//! Hooks for anything that wants to watch a maze being built and solved.
//!
//! The grid, generator and solver always talk to a `RenderSink`. When nobody is watching that sink
//! is the `NullRenderer`, so the algorithms never branch on whether drawing is enabled.

use crate::cells::Walls;
use crate::grid_geometry::{CellRect, Point};

pub trait RenderSink {
    /// Redraw one cell's walls inside the given pixel rectangle.
    fn draw_cell(&mut self, rect: CellRect, walls: Walls);

    /// Draw a solver move between two cell centres. `undo` marks a move backed out of a dead end.
    fn draw_move(&mut self, from: Point, to: Point, undo: bool);
}

#[derive(Debug, Copy, Clone, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    #[inline(always)]
    fn draw_cell(&mut self, _: CellRect, _: Walls) {}

    #[inline(always)]
    fn draw_move(&mut self, _: Point, _: Point, _: bool) {}
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum RenderEvent {
    Cell { rect: CellRect, walls: Walls },
    Move { from: Point, to: Point, undo: bool },
}

/// Keeps every notification in order, e.g. to replay an animation later.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RenderSink for RecordingRenderer {
    fn draw_cell(&mut self, rect: CellRect, walls: Walls) {
        self.events.push(RenderEvent::Cell { rect, walls });
    }

    fn draw_move(&mut self, from: Point, to: Point, undo: bool) {
        self.events.push(RenderEvent::Move { from, to, undo });
    }
}

impl<'a, T: RenderSink + ?Sized> RenderSink for &'a mut T {
    fn draw_cell(&mut self, rect: CellRect, walls: Walls) {
        (**self).draw_cell(rect, walls)
    }

    fn draw_move(&mut self, from: Point, to: Point, undo: bool) {
        (**self).draw_move(from, to, undo)
    }
}

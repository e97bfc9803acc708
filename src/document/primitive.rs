use nalgebra::Point2;
use serde::Serialize;

/// One drawing command of a path, in absolute canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", content = "to", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo(Point2<f32>),
    LineTo(Point2<f32>),
    /// Smooth quadratic curve; the control point mirrors the previous one.
    SmoothQuadTo(Point2<f32>),
}

impl PathCommand {
    pub fn end_point(&self) -> Point2<f32> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::SmoothQuadTo(p) => p,
        }
    }
}

/// Ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point2::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point2::new(x, y)));
        self
    }

    pub fn smooth_quad_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands
            .push(PathCommand::SmoothQuadTo(Point2::new(x, y)));
        self
    }

    /// Append a detached straight segment.
    pub fn segment(&mut self, from: (f32, f32), to: (f32, f32)) -> &mut Self {
        self.move_to(from.0, from.1).line_to(to.0, to.1)
    }

    pub fn last_point(&self) -> Option<Point2<f32>> {
        self.commands.last().map(PathCommand::end_point)
    }
}

/// Vector primitive emitted for a block.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    Circle { center: Point2<f32>, radius: f32 },
    Path(Path),
}

//! Drawing collaborator contract
//!
//! The simulation issues immediate-mode commands against a [`Canvas`]; the
//! host decides how to rasterize them. [`CommandList`] records a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA colour, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0, 1.0]);
    pub const SLATE_GREY: Color = Color([112.0 / 255.0, 128.0 / 255.0, 144.0 / 255.0, 1.0]);
}

/// Colours for world elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const SHIP: Color = Color::WHITE;
    pub const THRUSTER_FILL: Color = Color::RED;
    pub const THRUSTER_STROKE: Color = Color::YELLOW;
    pub const OBSTACLE: Color = Color::SLATE_GREY;
    pub const MARKER: Color = Color::RED;
}

/// Immediate-mode 2D drawing surface
pub trait Canvas {
    /// Fill the whole visible area
    fn clear(&mut self, color: Color);
    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Outline a closed polygon
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        line_width: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
}

/// Canvas that records commands in issue order
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands
            .push(DrawCommand::FillRect { x, y, w, h, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list_records_in_order() {
        let mut list = CommandList::new();
        list.clear(Color::BLACK);
        list.stroke_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y], Color::WHITE, 3.0);
        list.fill_rect(1.0, 2.0, 2.0, 2.0, Color::RED);
        assert_eq!(list.len(), 3);

        let frame = list.take();
        assert!(list.is_empty());
        assert_eq!(frame[0], DrawCommand::Clear(Color::BLACK));
        assert!(matches!(
            &frame[1],
            DrawCommand::StrokePolygon { points, line_width, .. } if points.len() == 3 && *line_width == 3.0
        ));
        assert!(matches!(frame[2], DrawCommand::FillRect { x, .. } if x == 1.0));
    }

    #[test]
    fn test_command_serializes() {
        let cmd = DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            w: 2.0,
            h: 2.0,
            color: colors::MARKER,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("FillRect"));
    }
}

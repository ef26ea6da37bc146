// Drawing-target and viewport abstractions. The browser implementations live in
// renderer.rs and web.rs; the recording/fixed versions here drive native tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::color::Color;

/// A 2D target the network draws onto.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resizes the backing pixel buffer. Contents are undefined afterwards.
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, opacity: f64, width: f64);
}

/// Source of the current viewport size in pixels.
pub trait Viewport {
    fn size(&self) -> (u32, u32);
}

// Shared so a test can change the size after handing the viewport to a network
#[derive(Clone, Debug)]
pub struct FixedViewport {
    size: Rc<Cell<(u32, u32)>>,
}

impl FixedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        FixedViewport {
            size: Rc::new(Cell::new((width, height))),
        }
    }

    pub fn set(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }
}

impl Viewport for FixedViewport {
    fn size(&self) -> (u32, u32) {
        self.size.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: [f64; 2],
        radius: f64,
        color: Color,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        opacity: f64,
        width: f64,
    },
}

/// Surface that remembers what was drawn since the last clear.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames cleared so far.
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, opacity: f64, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            opacity,
            width,
        });
    }
}

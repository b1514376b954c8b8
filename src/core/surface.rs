//! Drawing primitives emitted by the orb and the surfaces that consume them.
//!
//! The orb never talks to a canvas directly. Each frame is a short sequence
//! of [`DrawCommand`]s handed to a [`Surface`]; the browser front-end replays
//! them onto a 2D context while [`DisplayList`] simply keeps them.

use super::color::Hsla;
use glam::Vec2;

/// A color stop of a gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Hsla,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Erase the whole surface.
    Clear,
    /// Fill the whole surface with a radial gradient between two circles
    /// sharing `center`.
    FillRadialGradient {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
    /// Stroke a full ellipse. `rotation` is in radians, about `center`.
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        color: Hsla,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Hsla,
        width: f32,
    },
}

/// Raster target the orb draws into.
pub trait Surface {
    /// Resize the backing store; implementations may discard contents.
    fn resize(&mut self, width: u32, height: u32);

    fn size(&self) -> (u32, u32);

    /// Whether the surface can still be drawn to. Once this returns false the
    /// renderer stops producing frames.
    fn is_available(&self) -> bool {
        true
    }

    fn draw(&mut self, command: &DrawCommand);
}

/// Headless surface that records the commands of the most recent frame.
///
/// A [`DrawCommand::Clear`] starts a new frame and drops what was recorded
/// before it. `writes` counts every command ever received.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    writes: u64,
    detached: bool,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Mark the surface as gone, as when a canvas leaves the document.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
    }
}

impl Surface for DisplayList {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_available(&self) -> bool {
        !self.detached
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.writes += 1;
        if matches!(command, DrawCommand::Clear) {
            self.commands.clear();
        }
        self.commands.push(command.clone());
    }
}

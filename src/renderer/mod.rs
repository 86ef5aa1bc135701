//! Rendering sink
//!
//! Scenes draw through the `Canvas` trait only. The crate ships `DrawList`,
//! a canvas that records primitives for headless runs and tests; a pixel
//! backend implements the same trait.

pub mod shapes;

/// Primitive drawing operations, in palette colors. Fire-and-forget.
pub trait Canvas {
    /// Fill the whole screen
    fn cls(&mut self, color: u8);
    /// Filled circle centered at (x, y)
    fn circ(&mut self, x: i32, y: i32, r: i32, color: u8);
    /// Filled rectangle with top-left corner (x, y)
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8);
    /// Text with top-left corner (x, y)
    fn text(&mut self, x: i32, y: i32, s: &str, color: u8);
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Cls { color: u8 },
    Circ { x: i32, y: i32, r: i32, color: u8 },
    Rect { x: i32, y: i32, w: i32, h: i32, color: u8 },
    Text { x: i32, y: i32, text: String, color: u8 },
}

/// Canvas that records every call
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Find a text command by content
    pub fn find_text(&self, needle: &str) -> Option<&DrawCmd> {
        self.cmds
            .iter()
            .find(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == needle))
    }
}

impl Canvas for DrawList {
    fn cls(&mut self, color: u8) {
        self.cmds.push(DrawCmd::Cls { color });
    }

    fn circ(&mut self, x: i32, y: i32, r: i32, color: u8) {
        self.cmds.push(DrawCmd::Circ { x, y, r, color });
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        self.cmds.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn text(&mut self, x: i32, y: i32, s: &str, color: u8) {
        self.cmds.push(DrawCmd::Text {
            x,
            y,
            text: s.to_string(),
            color,
        });
    }
}

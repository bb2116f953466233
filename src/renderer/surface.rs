//! Drawing surface abstraction
//!
//! The game only issues draw calls; it never reads anything back. The canvas
//! backend forwards them to the browser, `CommandBuffer` records them.

use glam::Vec2;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        }
    }
}

/// Font, alignment and fill color for a text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub align: TextAlign,
    pub color: String,
}

/// Immediate-mode 2D output sink
pub trait Surface {
    /// Clear the rectangle from the origin to `size`
    fn clear(&mut self, size: Vec2);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
}

/// Headless surface that records every call
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded text draws
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut buf = CommandBuffer::new();
        buf.clear(Vec2::new(10.0, 10.0));
        buf.fill_circle(Vec2::ONE, 2.0, "blue");
        buf.fill_text("hi", Vec2::ZERO, &TextStyle {
            font: "10px Arial".into(),
            align: TextAlign::Center,
            color: "red".into(),
        });

        assert_eq!(buf.commands.len(), 3);
        assert!(matches!(buf.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(buf.texts().collect::<Vec<_>>(), vec!["hi"]);

        buf.reset();
        assert!(buf.commands.is_empty());
    }

    #[test]
    fn test_text_align_names() {
        assert_eq!(TextAlign::Center.as_str(), "center");
        assert_eq!(TextAlign::default(), TextAlign::Start);
    }
}

//! Rendering module
//!
//! Immediate-mode 2D drawing through the `Surface` trait. The browser build
//! draws into a canvas; tests and the native binary record commands.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{GAME_OVER_TEXT, draw_game_over, draw_scene};
pub use surface::{CommandBuffer, DrawCommand, Surface, TextAlign, TextStyle};

//! Scene drawing for a game state

use glam::Vec2;

use super::surface::{Surface, TextAlign, TextStyle};
use crate::sim::GameState;

pub const GAME_OVER_TEXT: &str = "Game Over";

/// Clear the field and draw live tiles, then the paddle, then the ball
pub fn draw_scene<S: Surface>(surface: &mut S, state: &GameState) {
    let config = &state.config;
    let palette = &config.palette;

    surface.clear(Vec2::new(config.field_width, config.field_height));

    let size = state.tiles.tile_size;
    for (_, tile) in state.tiles.iter() {
        if tile.alive {
            surface.fill_rect(tile.pos, size, &palette.tile);
        }
    }

    let platform = &state.platform;
    surface.fill_rect(
        platform.pos,
        Vec2::new(platform.width, platform.height),
        &palette.paddle,
    );

    surface.fill_circle(state.ball.pos, state.ball.radius, &palette.ball);
}

/// Banner drawn over the last frame once the ball is lost
pub fn draw_game_over<S: Surface>(surface: &mut S, state: &GameState) {
    let config = &state.config;
    let style = TextStyle {
        font: config.palette.game_over_font.clone(),
        align: TextAlign::Center,
        color: config.palette.game_over.clone(),
    };
    let center = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);
    surface.fill_text(GAME_OVER_TEXT, center, &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::surface::{CommandBuffer, DrawCommand};

    #[test]
    fn test_scene_order_and_count() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.tiles.get_mut(1, 4).unwrap().alive = false;

        let mut buf = CommandBuffer::new();
        draw_scene(&mut buf, &state);

        // clear + 23 tiles + paddle + ball
        assert_eq!(buf.commands.len(), 26);
        assert_eq!(
            buf.commands[0],
            DrawCommand::Clear {
                size: Vec2::new(500.0, 400.0)
            }
        );
        assert!(matches!(
            &buf.commands[24],
            DrawCommand::Rect { color, .. } if color == "red"
        ));
        assert!(matches!(
            &buf.commands[25],
            DrawCommand::Circle { radius, color, .. } if *radius == 8.0 && color == "yellowgreen"
        ));
    }

    #[test]
    fn test_game_over_banner() {
        let state = GameState::new(GameConfig::default(), 3);
        let mut buf = CommandBuffer::new();
        draw_game_over(&mut buf, &state);

        match &buf.commands[..] {
            [DrawCommand::Text { text, pos, style }] => {
                assert_eq!(text, GAME_OVER_TEXT);
                assert_eq!(*pos, Vec2::new(250.0, 200.0));
                assert_eq!(style.font, "50px Arial");
                assert_eq!(style.align, TextAlign::Center);
                assert_eq!(style.color, "red");
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }
}

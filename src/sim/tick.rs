//! Per-frame simulation step
//!
//! `advance` moves the ball, `play` resolves at most one collision. `step`
//! runs both back to back for headless use; the renderer interleaves drawing
//! between them.

use super::collision::{
    ball_over_platform, bounce_horizontal, bounce_vertical, paddle_launch_angle,
};
use super::state::{GameEvent, GameState, GameStatus, Key};

/// Move the ball one frame along its velocity
pub fn advance(state: &mut GameState) {
    if state.is_finished() {
        return;
    }
    state.ball.advance();
    state.frame += 1;
}

/// Resolve collisions for the current ball position
///
/// Checks run in a fixed order (ceiling, bottom band, side walls, tiles) and
/// the first hit ends the step.
pub fn play(state: &mut GameState) -> Option<GameEvent> {
    if state.is_finished() {
        return None;
    }

    let config = &state.config;
    let ball = &mut state.ball;
    let r = ball.radius;

    // Ceiling
    if ball.pos.y <= r {
        bounce_vertical(ball);
        return Some(GameEvent::CeilingBounce);
    }

    // Bottom band: paddle row or floor
    if ball.pos.y >= config.field_height - config.paddle_height - r {
        if ball_over_platform(ball.pos.x, config.paddle_margin(), &state.platform) {
            ball.launch(paddle_launch_angle(ball.pos.x, &state.platform));
            return Some(GameEvent::PaddleHit);
        } else if ball.pos.y >= config.field_height - r {
            state.status = GameStatus::Finish;
            log::info!(
                "Game over at frame {} ({} tiles left)",
                state.frame,
                state.tiles.alive_count()
            );
            return Some(GameEvent::GameOver);
        }
    }

    // Side walls
    if ball.pos.x <= r || ball.pos.x >= config.field_width - r {
        bounce_horizontal(ball);
        return Some(GameEvent::WallBounce);
    }

    // Tiles, first live hit in row-major order
    let ball_box = ball.bounds();
    let size = state.tiles.tile_size;
    for ((row, column), tile) in state.tiles.iter_mut() {
        if !tile.alive {
            continue;
        }
        if tile.bounds(size).overlaps(&ball_box) {
            tile.alive = false;
            bounce_vertical(ball);
            log::debug!("Tile ({}, {}) broken", row, column);
            return Some(GameEvent::TileBroken { row, column });
        }
    }

    None
}

/// Advance and resolve one frame without drawing
pub fn step(state: &mut GameState) -> Option<GameEvent> {
    advance(state);
    play(state)
}

/// Paddle move that brings its centre toward the ball, if any is needed
///
/// Holds still while the ball is within half a paddle step of the centre.
pub fn autopilot_key(state: &GameState) -> Option<Key> {
    if state.is_finished() {
        return None;
    }
    let platform = &state.platform;
    let offset = state.ball.pos.x - platform.center_x();
    let dead_zone = platform.speed / 2.0;
    if offset < -dead_zone {
        Some(Key::Left)
    } else if offset > dead_zone {
        Some(Key::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::{direction_from_angle, heading};
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn state_with(pos: Vec2, angle: f32) -> GameState {
        let mut state = GameState::with_angle(GameConfig::default(), angle);
        state.ball.pos = pos;
        state
    }

    #[test]
    fn test_advance_moves_along_velocity() {
        let mut state = state_with(Vec2::new(250.0, 200.0), -FRAC_PI_2);
        advance(&mut state);
        assert!((state.ball.pos.x - 250.0).abs() < 1e-4);
        assert!((state.ball.pos.y - 195.0).abs() < 1e-4);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_ceiling_bounce() {
        let angle = -FRAC_PI_4 - 0.3;
        let mut state = state_with(Vec2::new(250.0, 8.0), angle);
        let before = state.ball.vel;

        assert_eq!(play(&mut state), Some(GameEvent::CeilingBounce));
        assert_eq!(state.ball.vel.x, before.x);
        assert_eq!(state.ball.vel.y, -before.y);
        assert!(state.ball.vel.y > 0.0, "now heading down");
        assert_eq!(state.ball.pos, Vec2::new(250.0, 8.0));
    }

    #[test]
    fn test_wall_bounce_reflects_heading() {
        let angle = -FRAC_PI_4;
        let mut state = state_with(Vec2::new(495.0, 200.0), angle);

        assert_eq!(play(&mut state), Some(GameEvent::WallBounce));
        // heading' = π - heading, compared as directions to avoid wraparound
        let expected = direction_from_angle(PI - angle);
        assert!((state.ball.vel.normalize() - expected).length() < 1e-5);

        let mut state = state_with(Vec2::new(8.0, 200.0), -3.0 * FRAC_PI_4);
        assert_eq!(play(&mut state), Some(GameEvent::WallBounce));
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_centre_paddle_hit_goes_straight_up() {
        let mut state = state_with(Vec2::new(250.0, 382.0), FRAC_PI_2 - 0.2);
        assert_eq!(play(&mut state), Some(GameEvent::PaddleHit));
        assert!((heading(state.ball.vel) + FRAC_PI_2).abs() < 1e-5);
        assert!((state.ball.speed() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_hit_after_ceiling_still_goes_up() {
        let mut state = state_with(Vec2::new(250.0, 8.0), -FRAC_PI_2);
        play(&mut state);
        assert!(state.ball.vel.y > 0.0);

        state.ball.pos = Vec2::new(200.0, 383.0);
        assert_eq!(play(&mut state), Some(GameEvent::PaddleHit));
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.vel.x < 0.0, "left of centre heads left");
    }

    #[test]
    fn test_floor_outside_paddle_finishes() {
        let mut state = state_with(Vec2::new(50.0, 392.0), FRAC_PI_2);
        assert_eq!(play(&mut state), Some(GameEvent::GameOver));
        assert_eq!(state.status, GameStatus::Finish);

        // Terminal: nothing moves or changes any more
        let snapshot = (state.ball.pos, state.ball.vel, state.frame);
        assert_eq!(step(&mut state), None);
        assert_eq!(play(&mut state), None);
        assert_eq!((state.ball.pos, state.ball.vel, state.frame), snapshot);
        assert_eq!(state.status, GameStatus::Finish);
    }

    #[test]
    fn test_bottom_band_above_floor_falls_through() {
        // In the paddle row but beside the paddle and not yet at the floor
        let mut state = state_with(Vec2::new(50.0, 385.0), FRAC_PI_2);
        assert_eq!(play(&mut state), None);
        assert_eq!(state.status, GameStatus::Play);
    }

    #[test]
    fn test_tile_hit_breaks_first_live_tile() {
        // Ball touching tile (0, 0) from below
        let mut state = state_with(Vec2::new(20.0, 36.0), -FRAC_PI_2);
        let before = state.ball.vel;

        assert_eq!(
            play(&mut state),
            Some(GameEvent::TileBroken { row: 0, column: 0 })
        );
        assert!(!state.tiles.get(0, 0).unwrap().alive);
        assert_eq!(state.ball.vel.y, -before.y);
        assert_eq!(state.tiles.alive_count(), 23);

        // Same spot again: (0, 0) is dead, so (1, 0) is next in row-major order
        assert_eq!(
            play(&mut state),
            Some(GameEvent::TileBroken { row: 1, column: 0 })
        );
        assert_eq!(state.tiles.alive_count(), 22);
    }

    #[test]
    fn test_dead_tiles_never_match() {
        let mut state = state_with(Vec2::new(100.0, 20.0), -FRAC_PI_2);
        for (_, tile) in state.tiles.iter_mut() {
            tile.alive = false;
        }
        assert_eq!(play(&mut state), None);
        assert_eq!(state.tiles.alive_count(), 0);
    }

    #[test]
    fn test_ceiling_wins_over_tiles() {
        let mut state = state_with(Vec2::new(20.0, 8.0), -FRAC_PI_2);
        assert_eq!(play(&mut state), Some(GameEvent::CeilingBounce));
        assert_eq!(state.tiles.alive_count(), 24);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = state_with(Vec2::new(100.0, 200.0), -FRAC_PI_2);
        assert_eq!(autopilot_key(&state), Some(Key::Left));
        state.ball.pos.x = 400.0;
        assert_eq!(autopilot_key(&state), Some(Key::Right));
        state.ball.pos.x = 260.0;
        assert_eq!(autopilot_key(&state), None);
        state.status = GameStatus::Finish;
        state.ball.pos.x = 0.0;
        assert_eq!(autopilot_key(&state), None);
    }
}

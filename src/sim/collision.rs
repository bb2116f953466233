//! Collision tests and bounce responses
//!
//! Everything here is axis-aligned: the ball is treated as a square box with
//! its radius as half-extent, tiles and the paddle as rectangles. Bounces
//! negate one axis of the velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use super::state::{Ball, Platform};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box spanning `size` from its top-left corner
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Square box of `half_extent` around `center`
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        let h = Vec2::splat(half_extent);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Overlap test; touching edges count as overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Whether the ball is over the paddle horizontally, with `margin` of slack
/// on both sides
#[inline]
pub fn ball_over_platform(ball_x: f32, margin: f32, platform: &Platform) -> bool {
    ball_x + margin >= platform.pos.x && ball_x - margin <= platform.right()
}

/// Launch angle for a paddle hit at `ball_x`
///
/// A hit dead centre goes straight up (-π/2); hits toward either end lean
/// toward that side, reaching -3π/4 on the left edge and -π/4 on the right.
/// Hits in the slack beyond the ends are treated as edge hits.
pub fn paddle_launch_angle(ball_x: f32, platform: &Platform) -> f32 {
    let half = platform.width / 2.0;
    let shift = ((platform.center_x() - ball_x) / half).clamp(-1.0, 1.0);
    let coef = shift / 2.0 + 0.5;
    -(coef * FRAC_PI_2 + FRAC_PI_4)
}

/// Reverse vertical travel (ceiling, tiles)
#[inline]
pub fn bounce_vertical(ball: &mut Ball) {
    ball.vel.y = -ball.vel.y;
}

/// Reverse horizontal travel (side walls)
#[inline]
pub fn bounce_horizontal(ball: &mut Ball) {
    ball.vel.x = -ball.vel.x;
}

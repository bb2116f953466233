//! Tile grid layout
//!
//! Rows × columns of equal tiles, each cell padded by `gap` on every side, so
//! neighbours sit `2 * gap` apart and the outer tiles keep `gap` from the
//! field edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Tile;
use crate::config::GameConfig;
use crate::consts::MAX_TILES;

/// Row-major grid of tiles sharing one size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    pub rows: usize,
    pub columns: usize,
    /// Width and height of every tile
    pub tile_size: Vec2,
    tiles: Vec<Tile>,
}

impl TileGrid {
    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Tile> {
        if row < self.rows && column < self.columns {
            self.tiles.get(self.index(row, column))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Tile> {
        if row < self.rows && column < self.columns {
            let i = self.index(row, column);
            self.tiles.get_mut(i)
        } else {
            None
        }
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.rows {
            return None;
        }
        let start = self.index(row, 0);
        self.tiles.get(start..start + self.columns)
    }

    /// Row-major iteration with (row, column) coordinates
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Tile)> {
        let columns = self.columns;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| ((i / columns, i % columns), tile))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Tile)> {
        let columns = self.columns;
        self.tiles
            .iter_mut()
            .enumerate()
            .map(move |(i, tile)| ((i / columns, i % columns), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.alive).count()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Build the full grid of live tiles for a new session
pub fn generate_tiles(config: &GameConfig) -> TileGrid {
    let width = config.tile_width();
    let height = config.tile_height;
    let gap = config.gap;

    let count = config.rows.checked_mul(config.columns).unwrap_or(0);
    let mut tiles = Vec::with_capacity(count.min(MAX_TILES));
    for i in 0..config.rows {
        for j in 0..config.columns {
            let x = (2 * j + 1) as f32 * gap + j as f32 * width;
            let y = (2 * i + 1) as f32 * gap + i as f32 * height;
            tiles.push(Tile::new(Vec2::new(x, y)));
        }
    }

    log::debug!(
        "Generated {}x{} tiles of {}x{}",
        config.rows,
        config.columns,
        width,
        height
    );

    TileGrid {
        rows: config.rows,
        columns: config.columns,
        tile_size: Vec2::new(width, height),
        tiles,
    }
}

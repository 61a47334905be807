//! Move engine: sliding, merging, spawning and termination checks
//!
//! A move visits every cell starting from the edge the tiles travel towards.
//! Each tile slides to the farthest empty cell along the direction; if the
//! cell just past that holds an equal tile that has not merged yet this move,
//! the two combine there instead. A tile produced by a merge carries
//! `merged_from` until the next move, which keeps it from merging twice.

use log::debug;

use crate::io::configuration::TWO_TILE_PROBABILITY;
use crate::math::random::RandomSource;
use crate::spatial::direction::{Direction, Traversals, Vector};
use crate::spatial::{Grid, Position, Tile};

/// Where a tile would stop and the cell just beyond it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarthestPosition {
    /// Last empty cell reached (the start cell if the first step is blocked)
    pub farthest: Position,
    /// Blocking cell past `farthest`, `None` if that step leaves the board
    pub next: Option<Position>,
}

/// What a single slide did to the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideResult {
    /// Whether any tile ended up in a different cell
    pub moved: bool,
    /// Sum of the values of all tiles created by merges
    pub score_gained: u64,
    /// Value of each tile created by a merge, in traversal order
    pub merged_values: Vec<u32>,
}

impl SlideResult {
    /// Whether a merge produced a tile of exactly `value`
    pub fn produced(&self, value: u32) -> bool {
        self.merged_values.contains(&value)
    }
}

/// Snapshot every tile's position and clear merge provenance
pub fn prepare_tiles(grid: &mut Grid) {
    grid.tiles_mut().for_each(Tile::prepare_for_move);
}

/// Walk from `cell` along `vector` while the next cell is on the board and empty
pub fn find_farthest_position(grid: &Grid, cell: Position, vector: Vector) -> FarthestPosition {
    let mut farthest = cell;

    loop {
        match farthest.step(vector).filter(|&next| grid.within_bounds(next)) {
            Some(next) if grid.cell_available(next) => farthest = next,
            next => return FarthestPosition { farthest, next },
        }
    }
}

/// Slide every tile on the board towards `direction`, merging equal neighbours
///
/// Only the board changes; spawning and scoring are left to the caller.
pub fn slide(grid: &mut Grid, direction: Direction) -> SlideResult {
    let vector = direction.vector();
    let traversals = Traversals::build(grid.size(), vector);
    let mut result = SlideResult::default();

    prepare_tiles(grid);

    for cell in traversals.cells() {
        let Some(tile) = grid.remove_tile(cell) else {
            continue;
        };

        let positions = find_farthest_position(grid, cell, vector);
        let merge = match positions.next {
            Some(next) => grid.merge_into(next, tile).map(|value| (next, value)),
            None => Err(tile),
        };

        let destination = match merge {
            Ok((next, value)) => {
                result.score_gained += u64::from(value);
                result.merged_values.push(value);
                next
            }
            Err(mut unmerged) => {
                unmerged.update_position(positions.farthest);
                grid.insert_tile(unmerged);
                positions.farthest
            }
        };

        if destination != cell {
            result.moved = true;
        }
    }

    result
}

/// Whether sliding towards `direction` would change the board
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let mut trial = grid.clone();
    slide(&mut trial, direction).moved
}

/// Whether any move is still possible: an empty cell or two equal neighbours
pub fn moves_available(grid: &Grid) -> bool {
    grid.cells_available() || tile_matches_available(grid)
}

/// Whether any tile has a neighbour it could merge with in one of the four directions
pub fn tile_matches_available(grid: &Grid) -> bool {
    grid.tiles().any(|tile| {
        Direction::ALL.iter().any(|direction| {
            tile.position
                .step(direction.vector())
                .and_then(|neighbour| grid.cell_content(neighbour))
                .is_some_and(|other| other.can_merge_with(tile.value))
        })
    })
}

/// Value of a freshly spawned tile: 2 most of the time, otherwise 4
pub fn spawn_value(random: &mut impl RandomSource) -> u32 {
    if random.next_unit() < TWO_TILE_PROBABILITY {
        2
    } else {
        4
    }
}

/// Place a new tile in a random empty cell; no-op on a full board
pub fn add_random_tile(grid: &mut Grid, random: &mut impl RandomSource) -> Option<Position> {
    if !grid.cells_available() {
        return None;
    }

    let value = spawn_value(random);
    let position = grid.random_available_cell(random)?;
    grid.insert_tile(Tile::new(position, value));
    debug!("Spawned {value} at ({}, {})", position.x, position.y);

    Some(position)
}

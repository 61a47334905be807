//! Tests for grid queries, mutation, random cell choice and persistence

#[cfg(test)]
mod tests {
    use twenty48::io::state::{SavedGrid, SavedTile};
    use twenty48::math::random::RandomSource;
    use twenty48::spatial::{Grid, Position, Tile};

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn next_unit(&mut self) -> f64 {
            0.0
        }

        fn next_index(&mut self, len: usize) -> usize {
            self.0.min(len.saturating_sub(1))
        }
    }

    fn grid_with(size: usize, tiles: &[(usize, usize, u32)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(x, y, value) in tiles {
            grid.insert_tile(Tile::new(Position::new(x, y), value));
        }
        grid
    }

    // Tests that out-of-bounds queries report no content
    // Verified by indexing cells without the bounds-checked get
    #[test]
    fn test_out_of_bounds_queries() {
        let grid = grid_with(4, &[(3, 3, 2)]);

        assert!(grid.within_bounds(Position::new(3, 3)));
        assert!(!grid.within_bounds(Position::new(4, 0)));
        assert!(grid.cell_content(Position::new(4, 0)).is_none());
        assert!(grid.cell_content(Position::new(0, 17)).is_none());
        assert!(grid.cell_occupied(Position::new(3, 3)));
        assert!(grid.cell_available(Position::new(0, 0)));
    }

    // Tests insert, remove and move
    // Verified by leaving the source cell populated in move_tile
    #[test]
    fn test_insert_remove_move() {
        let mut grid = grid_with(4, &[(1, 2, 8)]);

        grid.move_tile(Position::new(1, 2), Position::new(3, 2));
        assert!(grid.cell_available(Position::new(1, 2)));
        assert_eq!(
            grid.cell_content(Position::new(3, 2)).map(|tile| tile.position),
            Some(Position::new(3, 2))
        );

        let removed = grid.remove_tile(Position::new(3, 2));
        assert_eq!(removed.map(|tile| tile.value), Some(8));
        assert_eq!(grid.available_cells().len(), 16);
        assert!(grid.remove_tile(Position::new(3, 2)).is_none());
    }

    // Tests that available cells are listed columns outer, rows inner
    // Verified by iterating the matrix transposed
    #[test]
    fn test_available_cells_order() {
        let grid = grid_with(2, &[(0, 1, 2)]);

        assert_eq!(
            grid.available_cells(),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    // Tests random cell choice on a partly filled and a full board
    // Verified by returning the first cell regardless of the random index
    #[test]
    fn test_random_available_cell() {
        let partly = grid_with(2, &[(0, 0, 2)]);
        assert_eq!(
            partly.random_available_cell(&mut FixedIndex(2)),
            Some(Position::new(1, 1))
        );

        let full = grid_with(1, &[(0, 0, 2)]);
        assert!(!full.cells_available());
        assert_eq!(full.random_available_cell(&mut FixedIndex(0)), None);
    }

    // Tests merge eligibility: equal value and not merged this move
    // Verified by ignoring the merged flag in merge_into
    #[test]
    fn test_merge_into() {
        let mut grid = grid_with(4, &[(0, 0, 4), (1, 0, 2), (2, 0, 2)]);

        let refused = grid.merge_into(Position::new(0, 0), Tile::new(Position::new(3, 0), 2));
        assert_eq!(refused.map_err(|tile| tile.value), Err(2));
        assert_eq!(
            grid.cell_content(Position::new(0, 0)).map(|tile| tile.value),
            Some(4)
        );

        let empty = grid.merge_into(Position::new(3, 3), Tile::new(Position::new(3, 0), 2));
        assert!(empty.is_err());

        let merged = grid.merge_into(Position::new(1, 0), Tile::new(Position::new(2, 0), 2));
        assert_eq!(merged.ok(), Some(4));
        assert!(
            grid.cell_content(Position::new(1, 0))
                .is_some_and(Tile::is_merged)
        );

        let twice = grid.merge_into(Position::new(1, 0), Tile::new(Position::new(3, 0), 4));
        assert!(twice.is_err());

        let fresh = grid.merge_into(Position::new(0, 0), Tile::new(Position::new(3, 0), 4));
        assert_eq!(fresh.ok(), Some(8));
    }

    // Tests that a pair whose doubled value overflows is never merged
    // Verified by using wrapping_mul when doubling
    #[test]
    fn test_merge_into_refuses_overflow() {
        let top = 1 << 31;
        let mut grid = grid_with(2, &[(0, 0, top)]);

        let refused = grid.merge_into(Position::new(0, 0), Tile::new(Position::new(1, 0), top));

        assert_eq!(refused.map_err(|tile| tile.position), Err(Position::new(1, 0)));
        assert_eq!(
            grid.cell_content(Position::new(0, 0)).map(|tile| tile.value),
            Some(top)
        );
    }

    // Tests tile iteration and the highest value
    #[test]
    fn test_tiles_and_max_value() {
        let grid = grid_with(3, &[(0, 0, 2), (2, 1, 64), (1, 2, 8)]);

        assert_eq!(grid.tiles().count(), 3);
        assert_eq!(grid.max_tile_value(), Some(64));
        assert_eq!(Grid::new(3).max_tile_value(), None);
    }

    // Tests that serialize then restore keeps size, values and positions
    // Verified by transposing the cell matrix in serialize
    #[test]
    fn test_serialize_restores_layout() {
        let grid = grid_with(3, &[(0, 2, 2), (2, 0, 16)]);

        let saved = grid.serialize();
        assert_eq!(saved.size, 3);
        assert_eq!(
            saved.cells.get(2).and_then(|column| column.first()).copied(),
            Some(Some(SavedTile {
                position: Position::new(2, 0),
                value: 16,
            }))
        );

        let restored = Grid::from_saved(&saved);
        assert_eq!(restored.ok(), Some(grid));
    }

    // Tests rejection of snapshots that are not playable boards
    // Verified by removing the power-of-two check
    #[test]
    fn test_from_saved_rejects_malformed_snapshots() {
        let tile = |x, y, value| {
            Some(SavedTile {
                position: Position::new(x, y),
                value,
            })
        };

        let zero = SavedGrid {
            size: 0,
            cells: vec![],
        };
        let ragged = SavedGrid {
            size: 2,
            cells: vec![vec![None, None], vec![None]],
        };
        let odd_value = SavedGrid {
            size: 1,
            cells: vec![vec![tile(0, 0, 3)]],
        };
        let misplaced = SavedGrid {
            size: 2,
            cells: vec![vec![tile(1, 1, 2), None], vec![None, None]],
        };
        let too_large = SavedGrid {
            size: 64,
            cells: vec![],
        };

        for saved in [zero, ragged, odd_value, misplaced, too_large] {
            assert!(Grid::from_saved(&saved).is_err(), "accepted {saved:?}");
        }
    }
}

//! Tests for game constants and their relationships

#[cfg(test)]
mod tests {
    use twenty48::io::configuration::{
        DEFAULT_GRID_SIZE, DEFAULT_TILE_LABELS, MAX_GRID_SIZE, START_TILES, TILE_PALETTE,
        TWO_TILE_PROBABILITY, WINNING_VALUE,
    };

    // Tests the standard board rules
    // Verified by changing constant values
    #[test]
    fn test_board_rules() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(START_TILES, 2);
        assert_eq!(WINNING_VALUE, 2048);
        assert!((TWO_TILE_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    // Tests that the default board fits the size limit and the start tiles fit the board
    #[test]
    fn test_limits_are_consistent() {
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
        assert!(START_TILES <= DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE);
        assert!(WINNING_VALUE.is_power_of_two());
    }

    // Tests that label i names the tile 2^(i+1) and every label has a colour
    // Verified by dropping the first label
    #[test]
    fn test_label_table_matches_levels() {
        assert_eq!(DEFAULT_TILE_LABELS.len(), TILE_PALETTE.len());

        for (index, label) in DEFAULT_TILE_LABELS.iter().enumerate() {
            assert_eq!(*label, (2_u32 << index).to_string());
        }
        assert_eq!(
            DEFAULT_TILE_LABELS.last().copied(),
            Some(WINNING_VALUE.to_string().as_str())
        );
    }
}

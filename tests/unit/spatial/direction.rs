//! Tests for direction encoding, vectors and traversal order

#[cfg(test)]
mod tests {
    use twenty48::spatial::Direction;
    use twenty48::spatial::Position;
    use twenty48::spatial::direction::{Traversals, Vector};

    // Tests the unit vector of each direction
    // Verified by swapping the Up and Down vectors
    #[test]
    fn test_vectors() {
        assert_eq!(Direction::Up.vector(), Vector { x: 0, y: -1 });
        assert_eq!(Direction::Right.vector(), Vector { x: 1, y: 0 });
        assert_eq!(Direction::Down.vector(), Vector { x: 0, y: 1 });
        assert_eq!(Direction::Left.vector(), Vector { x: -1, y: 0 });
    }

    // Tests integer encoding in both directions and rejection of unknown codes
    // Verified by accepting 4 as Up
    #[test]
    fn test_integer_encoding() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.index()).ok(), Some(direction));
        }
        assert_eq!(Direction::Left.index(), 3);
        assert!(Direction::try_from(4).is_err());
    }

    // Tests that traversal starts from the edge tiles move towards
    // Verified by reversing on vector.x == -1 instead of 1
    #[test]
    fn test_traversals_reverse_towards_positive_axis() {
        let right = Traversals::build(4, Direction::Right.vector());
        assert_eq!(right.x, vec![3, 2, 1, 0]);
        assert_eq!(right.y, vec![0, 1, 2, 3]);

        let down = Traversals::build(3, Direction::Down.vector());
        assert_eq!(down.x, vec![0, 1, 2]);
        assert_eq!(down.y, vec![2, 1, 0]);

        let left = Traversals::build(2, Direction::Left.vector());
        assert_eq!(left.x, vec![0, 1]);
        assert_eq!(left.y, vec![0, 1]);
    }

    // Tests that cells are visited with columns outer and rows inner
    // Verified by swapping the loop nesting in cells()
    #[test]
    fn test_cells_order() {
        let traversals = Traversals::build(2, Direction::Up.vector());
        let cells: Vec<Position> = traversals.cells().collect();

        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    // Tests human-readable names
    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

//! Tests for simulation progress tracking

#[cfg(test)]
mod tests {
    use twenty48::game::simulation::GameReport;
    use twenty48::io::progress::SimulationProgress;

    fn report(index: usize, score: u64, won: bool) -> GameReport {
        GameReport {
            index,
            seed: index as u64,
            score,
            moves: 10,
            highest_tile: 64,
            won,
            over: true,
        }
    }

    // Tests that every recorded game advances the bar
    // Verified by skipping inc in record
    #[test]
    fn test_record_advances_position() {
        let mut progress = SimulationProgress::new(3, false);

        progress.record(&report(0, 120, false));
        progress.record(&report(1, 900, true));

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests that a visible bar can be driven to completion
    #[test]
    fn test_visible_progress_lifecycle() {
        let mut progress = SimulationProgress::new(1, true);

        progress.record(&report(0, 40, false));

        assert_eq!(progress.position(), 1);
        progress.finish();
    }
}

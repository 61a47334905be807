//! Tests for command-line parsing and the simulation report

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;
    use twenty48::game::simulation::SimulationSummary;
    use twenty48::io::cli::{Cli, Command, format_summary};
    use twenty48::io::configuration::{
        DEFAULT_GRID_SIZE, DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_SIMULATION_GAMES,
        DEFAULT_STATE_DIR, START_TILES,
    };

    // Tests that the derived command definition is consistent
    // Verified by giving two arguments the same short flag
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    // Tests play defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_play_defaults() {
        let cli = Cli::parse_from(["program", "play"]);
        let Command::Play(args) = cli.command else {
            panic!("expected the play subcommand");
        };

        assert_eq!(args.state_dir, PathBuf::from(DEFAULT_STATE_DIR));
        assert_eq!(args.seed, None);
        assert!(!args.memory);
        assert_eq!(args.size, DEFAULT_GRID_SIZE);
        assert_eq!(args.tile_labels().label(2048), "2048");
    }

    // Tests play options including the comma-separated label table
    // Verified by dropping the value delimiter from the labels argument
    #[test]
    fn test_play_options() {
        let cli = Cli::parse_from([
            "program", "play", "--seed", "9", "--memory", "--size", "5", "--labels", "a,b,c",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected the play subcommand");
        };

        assert_eq!(args.seed, Some(9));
        assert_eq!(args.size, 5);
        assert!(!args.storage().is_persistent());

        let labels = args.tile_labels();
        assert_eq!(labels.label(2), "a");
        assert_eq!(labels.label(8), "c");
        assert_eq!(labels.label(16), "16");
    }

    // Tests simulate defaults and overrides
    // Verified by inverting the quiet flag in should_show_progress
    #[test]
    fn test_simulate_args() {
        let defaults = Cli::parse_from(["program", "simulate"]);
        let Command::Simulate(args) = defaults.command else {
            panic!("expected the simulate subcommand");
        };
        let config = args.config();
        assert_eq!(config.games, DEFAULT_SIMULATION_GAMES);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.max_moves, DEFAULT_MAX_MOVES);
        assert_eq!(config.game.size, DEFAULT_GRID_SIZE);
        assert_eq!(config.game.start_tiles, START_TILES);
        assert!(args.should_show_progress());
        assert_eq!(args.snapshot, None);

        let custom = Cli::parse_from([
            "program",
            "simulate",
            "-g",
            "3",
            "-s",
            "77",
            "--max-moves",
            "50",
            "--snapshot",
            "best.png",
            "-q",
        ]);
        let Command::Simulate(args) = custom.command else {
            panic!("expected the simulate subcommand");
        };
        assert_eq!(args.config().games, 3);
        assert_eq!(args.config().seed, 77);
        assert_eq!(args.config().max_moves, 50);
        assert_eq!(args.snapshot, Some(PathBuf::from("best.png")));
        assert!(!args.should_show_progress());
    }

    // Tests that a subcommand is required
    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["program"]).is_err());
        assert!(Cli::try_parse_from(["program", "simulate", "--games", "many"]).is_err());
    }

    // Tests the summary report lines
    // Verified by dividing wins by best score for the percentage
    #[test]
    fn test_format_summary() {
        let summary = SimulationSummary {
            games: 4,
            wins: 1,
            best_score: 2500,
            highest_tile: 256,
            average_score: 1200.5,
            best_board: None,
        };

        let report = format_summary(&summary);

        assert!(report.contains("Games: 4"));
        assert!(report.contains("Wins: 1 (25.0%)"));
        assert!(report.contains("Best score: 2500"));
        assert!(report.contains("Average score: 1200.5"));
        assert!(report.contains("Highest tile: 256"));
    }
}

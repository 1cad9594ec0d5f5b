//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use chaosgame::io::cli::{Cli, FractalRunner, parse_point, suffixed_path};
    use chaosgame::io::configuration::{
        DEFAULT_IMAGE_SIZE, DEFAULT_NUM_CORNERS, DEFAULT_NUM_POINTS, DEFAULT_OUTPUT, Preset,
    };
    use clap::Parser;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.corners, DEFAULT_NUM_CORNERS);
        assert_eq!(cli.points, DEFAULT_NUM_POINTS);
        assert_eq!(cli.size, DEFAULT_IMAGE_SIZE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.start, [0.0, 0.0]);
        assert!(cli.probabilities.is_empty());
        assert!(cli.seed.is_none());
        assert!(!cli.corner_at_center);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the value delimiter on probabilities
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--corners",
            "4",
            "--scale",
            "0.25",
            "--probabilities",
            "0.1,0.2,0.3",
            "--points",
            "500",
            "--start",
            "-0.5,0.25",
            "--corner-at-center",
            "--seed",
            "9",
            "--output",
            "out/fractal.png",
            "--size",
            "256",
            "--quiet",
        ]);

        assert_eq!(cli.corners, 4);
        assert!((cli.scale - 0.25).abs() < f64::EPSILON);
        assert_eq!(cli.probabilities, vec![0.1, 0.2, 0.3]);
        assert_eq!(cli.points, 500);
        assert_eq!(cli.start, [-0.5, 0.25]);
        assert!(cli.corner_at_center);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.output, PathBuf::from("out/fractal.png"));
        assert_eq!(cli.size, 256);
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-c", "6", "-n", "100", "-p", "0.5,0.5", "-q"]);

        assert_eq!(cli.corners, 6);
        assert_eq!(cli.points, 100);
        assert_eq!(cli.probabilities, vec![0.5, 0.5]);
        assert!(cli.quiet);
    }

    // Tests a preset overrides the individual game flags
    // Verified by ignoring the preset in game_config
    #[test]
    fn test_preset_overrides_flags() {
        let cli = Cli::parse_from([
            "program",
            "--corners",
            "9",
            "--preset",
            "weighted-center-triangle",
        ]);
        let config = cli.game_config();

        assert_eq!(cli.preset, Some(Preset::WeightedCenterTriangle));
        assert_eq!(config.num_corners, 4);
        assert!(config.corner_at_center);
        assert_eq!(config.probabilities, vec![0.1, 0.1, 0.1]);
    }

    // Tests rendering both variants yields suffixed output paths
    // Verified by reusing the plain output path for both variants
    #[test]
    fn test_both_variants() {
        let cli = Cli::parse_from(["program", "--both", "-o", "img/game.png"]);

        assert_eq!(
            cli.variants(),
            vec![
                (false, PathBuf::from("img/game_polygon.png")),
                (true, PathBuf::from("img/game_center.png")),
            ]
        );
    }

    // Tests point parsing accepts pairs and rejects everything else
    // Verified by accepting a single coordinate
    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1.5, -2"), Ok([1.5, -2.0]));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    // Tests suffix insertion with and without an extension
    // Verified by appending the suffix after the extension
    #[test]
    fn test_suffixed_path() {
        assert_eq!(
            suffixed_path(&PathBuf::from("chaos.png"), "_center"),
            PathBuf::from("chaos_center.png")
        );
        assert_eq!(
            suffixed_path(&PathBuf::from("dir/chaos"), "_polygon"),
            PathBuf::from("dir/chaos_polygon")
        );
    }

    // Tests a full run writes every requested image
    // Verified by skipping the renderer call
    #[test]
    fn test_runner_writes_images() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory unavailable");
        };
        let output = dir.path().join("nested").join("game.png");
        let Some(output_arg) = output.to_str() else {
            unreachable!("non UTF-8 temporary path");
        };

        let cli = Cli::parse_from([
            "program", "--both", "-q", "-n", "300", "--seed", "1", "--size", "64", "-o",
            output_arg,
        ]);
        let mut runner = FractalRunner::new(cli);

        let Ok(written) = runner.process() else {
            unreachable!("run failed");
        };

        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|path| path.exists()));
    }

    // Tests invalid probabilities surface as run errors
    // Verified by defaulting to uniform probabilities on error
    #[test]
    fn test_runner_propagates_distribution_error() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory unavailable");
        };
        let output = dir.path().join("game.png");
        let Some(output_arg) = output.to_str() else {
            unreachable!("non UTF-8 temporary path");
        };

        let cli = Cli::parse_from(["program", "-q", "-c", "5", "-p", "0.5,0.5", "-o", output_arg]);
        let mut runner = FractalRunner::new(cli);

        let result = runner.process();

        assert!(result.is_err_and(|e| e.is_distribution_error()));
        assert!(!output.exists());
    }
}

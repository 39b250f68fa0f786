//! Tests for command-line interface parsing and output writing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use metaltile::PatternConfig;
    use metaltile::io::cli::{Cli, PatternWriter};
    use metaltile::io::configuration::{DEFAULT_CELL_NAME, DEFAULT_SEED};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn small_run(dir: &TempDir, extra: &[&str]) -> Cli {
        let output = dir.path().to_string_lossy().into_owned();
        let mut args = vec![
            "metaltile".to_string(),
            output,
            "--quiet".to_string(),
            "-n".to_string(),
            "test_cell".to_string(),
            "-W".to_string(),
            "20".to_string(),
            "-H".to_string(),
            "15".to_string(),
            "--seeds".to_string(),
            "5".to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::try_parse_from(args).expect("valid arguments")
    }

    // Tests CLI parsing with only the output directory
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["metaltile", "out"]);

        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.name, DEFAULT_CELL_NAME);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.pattern_config(), PatternConfig::default());
        assert!(cli.should_write_preview());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every option set
    // Verified by mapping min-spacing onto the width field
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "metaltile",
            "out",
            "--name",
            "logo",
            "--width",
            "50",
            "--height",
            "40",
            "--min-width",
            "1.0",
            "--min-spacing",
            "1.5",
            "--seeds",
            "12",
            "--skew",
            "2",
            "--seed",
            "7",
            "--no-preview",
            "--quiet",
        ]);

        let config = cli.pattern_config();
        assert_eq!(cli.name, "logo");
        assert_eq!(config.width.to_bits(), 50.0_f64.to_bits());
        assert_eq!(config.height.to_bits(), 40.0_f64.to_bits());
        assert_eq!(config.min_feature_width.to_bits(), 1.0_f64.to_bits());
        assert_eq!(config.min_feature_spacing.to_bits(), 1.5_f64.to_bits());
        assert_eq!(config.target_seed_count, 12);
        assert_eq!(config.skew_exponent.to_bits(), 2.0_f64.to_bits());
        assert_eq!(config.random_seed, 7);
        assert!(!cli.should_write_preview());
        assert!(!cli.should_show_progress());
    }

    // Tests malformed arguments are rejected by the parser
    // Verified by accepting any string as the seed count
    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["metaltile"]).is_err());
        assert!(Cli::try_parse_from(["metaltile", "out", "--seeds", "many"]).is_err());
        assert!(Cli::try_parse_from(["metaltile", "out", "--width", "wide"]).is_err());
    }

    // Tests a full run writes the stream, descriptor and preview named after the cell
    // Verified by skipping the preview write
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let written = PatternWriter::new(small_run(&temp_dir, &[]))
            .process()
            .expect("run succeeds");

        assert_eq!(written.gds, temp_dir.path().join("test_cell.gds"));
        assert_eq!(written.lef, temp_dir.path().join("test_cell.lef"));
        assert_eq!(
            written.preview,
            Some(temp_dir.path().join("test_cell.png"))
        );
        let lef = std::fs::read_to_string(&written.lef).expect("descriptor written");
        assert!(lef.contains("SIZE 20.000 BY 15.000 ;"));
        let gds = std::fs::read(&written.gds).expect("layout stream written");
        assert_eq!(gds.get(..6), Some(&[0x00, 0x06, 0x00, 0x02, 0x02, 0x58][..]));
        let preview = image::open(temp_dir.path().join("test_cell.png"))
            .expect("preview written")
            .to_rgba8();
        assert_eq!(preview.dimensions(), (160, 120));
    }

    // Tests --no-preview writes only the stream and the descriptor
    // Verified by ignoring the flag
    #[test]
    fn test_process_without_preview() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let written = PatternWriter::new(small_run(&temp_dir, &["--no-preview"]))
            .process()
            .expect("run succeeds");

        assert!(written.preview.is_none());
        assert!(written.lef.exists());
        assert!(written.gds.exists());
        assert!(!temp_dir.path().join("test_cell.png").exists());
    }

    // Tests invalid parameters fail before anything is written
    // Verified by writing the descriptor before validation
    #[test]
    fn test_process_invalid_parameters() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cli = small_run(&temp_dir, &["--min-width", "9"]);

        assert!(PatternWriter::new(cli).process().is_err());
        assert!(!temp_dir.path().join("test_cell.lef").exists());
        assert!(!temp_dir.path().join("test_cell.gds").exists());
    }
}

//! CLI integration tests for config loading and registry selection.
//!
//! Tests cover:
//! - Generator settings from INI files on disk
//! - Config validation errors and their exit codes
//! - Registry selection (builtin catalog vs CSV file)
//! - Argument parsing for each subcommand

mod common;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use synthmarket::adapters::file_config_adapter::FileConfigAdapter;
use synthmarket::cli::{self, Cli, Command};
use synthmarket::domain::config_validation::validate_service_config;
use synthmarket::domain::error::SynthError;
use synthmarket::domain::series::{GeneratorSettings, SeriesKind};
use synthmarket::ports::config_port::ConfigPort;
use synthmarket::ports::instrument_port::InstrumentPort;

fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// ExitCode has no PartialEq; compare through its Debug output.
fn assert_exit_code(actual: ExitCode, expected: u8) {
    assert_eq!(format!("{actual:?}"), format!("{:?}", ExitCode::from(expected)));
}

const VALID_INI: &str = r#"
[server]
listen = 127.0.0.1:5000
cors = true

[generator]
horizon_days = 60
max_page_size = 25
lookback_days = 250

[log]
level = debug
"#;

const REGISTRY_CSV: &str = "id,symbol,name,area,industry,exchange,list_date
1,600519,贵州茅台,贵州,白酒,SSE,20010827
2,000858,五粮液,四川,白酒,SZSE,19980427
";

mod settings {
    use super::*;

    #[test]
    fn reads_generator_section() {
        let file = write_temp_file(VALID_INI);
        let config = FileConfigAdapter::from_file(file.path()).unwrap();
        let settings = cli::build_generator_settings(&config).unwrap();
        assert_eq!(
            settings,
            GeneratorSettings {
                horizon_days: 60,
                max_page_size: 25,
                lookback_days: 250,
            }
        );
    }

    #[test]
    fn missing_section_uses_defaults() {
        let config = FileConfigAdapter::from_string("[server]\nlisten = 127.0.0.1:5000\n").unwrap();
        let settings = cli::build_generator_settings(&config).unwrap();
        assert_eq!(settings, GeneratorSettings::default());
    }

    #[test]
    fn zero_horizon_rejected() {
        let config = FileConfigAdapter::from_string("[generator]\nhorizon_days = 0\n").unwrap();
        let err = cli::build_generator_settings(&config).unwrap_err();
        assert!(matches!(
            err,
            SynthError::ConfigInvalid { ref key, .. } if key == "horizon_days"
        ));
        assert_exit_code(ExitCode::from(&err), 2);
    }

    #[test]
    fn non_numeric_page_size_rejected() {
        let config =
            FileConfigAdapter::from_string("[generator]\nmax_page_size = lots\n").unwrap();
        let err = cli::build_generator_settings(&config).unwrap_err();
        assert!(err.to_string().contains("max_page_size"));
    }

    #[test]
    fn zero_lookback_allowed() {
        let config = FileConfigAdapter::from_string("[generator]\nlookback_days = 0\n").unwrap();
        let settings = cli::build_generator_settings(&config).unwrap();
        assert_eq!(settings.lookback_days, 0);
    }
}

mod validation {
    use super::*;

    #[test]
    fn valid_service_config_passes() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        assert!(validate_service_config(&config).is_ok());
    }

    #[test]
    fn bad_listen_address_rejected() {
        let config = FileConfigAdapter::from_string("[server]\nlisten = not-an-address\n").unwrap();
        let err = validate_service_config(&config).unwrap_err();
        assert!(matches!(err, SynthError::ConfigInvalid { ref section, .. } if section == "server"));
    }

    #[test]
    fn unknown_log_level_rejected() {
        let config = FileConfigAdapter::from_string("[log]\nlevel = loud\n").unwrap();
        let err = validate_service_config(&config).unwrap_err();
        assert!(matches!(err, SynthError::ConfigInvalid { ref key, .. } if key == "level"));
    }

    #[test]
    fn load_config_missing_file_fails() {
        let result = cli::load_config(&PathBuf::from("/nonexistent/synthmarket.ini"));
        assert!(result.is_err());
    }
}

mod registry {
    use super::*;

    #[test]
    fn no_config_uses_builtin_catalog() {
        let registry = cli::build_registry(None).unwrap();
        let all = registry.list_instruments().unwrap();
        assert_eq!(all.len(), 100);
        assert_eq!(registry.find_instrument("600519").unwrap().name, "贵州茅台");
    }

    #[test]
    fn config_without_path_uses_builtin_catalog() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let registry = cli::build_registry(Some(&config as &dyn ConfigPort)).unwrap();
        assert_eq!(registry.list_instruments().unwrap().len(), 100);
    }

    #[test]
    fn registry_path_loads_csv() {
        let csv = write_temp_file(REGISTRY_CSV);
        let ini = format!("[registry]\npath = {}\n", csv.path().display());
        let config = FileConfigAdapter::from_string(&ini).unwrap();

        let registry = cli::build_registry(Some(&config as &dyn ConfigPort)).unwrap();
        let all = registry.list_instruments().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(registry.find_instrument("2").unwrap().symbol, "000858");
    }

    #[test]
    fn missing_registry_file_is_registry_error() {
        let config =
            FileConfigAdapter::from_string("[registry]\npath = /nonexistent/instruments.csv\n")
                .unwrap();
        let err = cli::build_registry(Some(&config as &dyn ConfigPort))
            .err()
            .unwrap();
        assert!(matches!(err, SynthError::Registry { .. }));
        assert_exit_code(ExitCode::from(&err), 3);
    }
}

mod arguments {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["synthmarket", "generate", "--symbol", "600519"]).unwrap();
        match cli.command {
            Command::Generate {
                symbol,
                kind,
                days,
                page,
                size,
                anchor,
                config,
            } => {
                assert_eq!(symbol, "600519");
                assert_eq!(kind, SeriesKind::Predictions);
                assert_eq!(days, 50);
                assert!(page.is_none() && size.is_none());
                assert!(anchor.is_none());
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_with_kind_and_anchor() {
        let cli = Cli::try_parse_from([
            "synthmarket",
            "generate",
            "--symbol",
            "000858",
            "--kind",
            "technical-factors",
            "--anchor",
            "2024-06-03",
            "--page",
            "2",
            "--size",
            "10",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                kind, anchor, page, ..
            } => {
                assert_eq!(kind, SeriesKind::TechnicalFactors);
                assert_eq!(anchor, Some(common::anchor()));
                assert_eq!(page.as_deref(), Some("2"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let result = Cli::try_parse_from([
            "synthmarket",
            "generate",
            "--symbol",
            "1",
            "--kind",
            "candles",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_requires_config() {
        assert!(Cli::try_parse_from(["synthmarket", "serve"]).is_err());
        let cli = Cli::try_parse_from(["synthmarket", "serve", "-c", "synthmarket.ini"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { .. }));
    }

    #[test]
    fn seed_command_succeeds() {
        let cli = Cli::try_parse_from(["synthmarket", "seed", "--symbol", "600519"]).unwrap();
        assert_exit_code(cli::run(cli), 0);
    }

    #[test]
    fn generate_with_missing_config_fails() {
        let cli = Cli::try_parse_from([
            "synthmarket",
            "generate",
            "--symbol",
            "600519",
            "--config",
            "/nonexistent/synthmarket.ini",
        ])
        .unwrap();
        assert_exit_code(cli::run(cli), 2);
    }
}

//! Global subscriber installation. One process, one subscriber: this binary
//! holds the only test that installs one.

use morph_log::{Config, Format, LogError, WriterConfig, init_with};
use rstest::rstest;

#[test]
fn installs_once() {
    let config = Config {
        level: "debug".to_string(),
        format: Format::Json,
        writer: WriterConfig::Stderr,
        service: Some("morph-test".to_string()),
        ..Config::default()
    };
    let _guard = init_with(config).unwrap();
    morph_log::info!(step = "installed", "first subscriber");

    let err = init_with(Config::default()).unwrap_err();
    assert_eq!(err.code(), "LOG_CONFIG_ERROR");
}

#[rstest]
#[case("info,morph_convert=verbose")]
#[case("morph=loud")]
fn bad_filter_fails_without_installing(#[case] level: &str) {
    let config = Config {
        level: level.to_string(),
        ..Config::default()
    };
    assert!(matches!(init_with(config), Err(LogError::Filter { .. })));
}

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use citypin::config::Config;
use citypin::constants::INITIAL_STATUS;
use citypin::logger::Log;
use citypin::resolution::Resolver;

fn create_test_config_file(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("citypin").join("citypin.toml");

    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, content).unwrap();

    (temp_dir, config_path)
}

/// Build a resolver writing into a fresh temp directory.
fn create_test_resolver() -> (tempfile::TempDir, PathBuf, Resolver) {
    let temp_dir = tempdir().unwrap();
    let result_path = temp_dir.path().join("Result.inc");

    let config = Config {
        result_save: Some(result_path.clone()),
        on_complete_action: None,
    };
    let resolver = Resolver::new(&config).unwrap();

    (temp_dir, result_path, resolver)
}

#[test]
#[serial]
fn test_integration_config_round_trip() {
    Log::set_enabled(false);

    let config_content = r#"
result_save = "/tmp/citypin/Result.inc"
on_complete_action = "[!Refresh CityWidget]"
"#;
    let (_temp_dir, config_path) = create_test_config_file(config_content);

    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(
        config.result_save,
        Some(PathBuf::from("/tmp/citypin/Result.inc"))
    );
    assert_eq!(
        config.on_complete_action.as_deref(),
        Some("[!Refresh CityWidget]")
    );

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_tokyo_scenario() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();
    assert_eq!(resolver.last_result(), INITIAL_STATUS);

    resolver.handle_command("Execute Tokyo");

    assert_eq!(
        resolver.last_result(),
        "City: Tokyo, Country: Japan, Lat: 35.6897, Lng: 139.6922"
    );

    let content = fs::read_to_string(&result_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "[Result_1]");
    assert_eq!(lines[1], "Meter=String");
    assert_eq!(lines[2], "Text=Tokyo,Japan");
    assert_eq!(lines[3], "MeterStyle=Result_String");
    assert!(lines[4].starts_with("LeftMouseUpAction="));

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_not_found_scenario() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();
    resolver.handle_command("Execute Atlantis");

    assert_eq!(resolver.last_result(), "No Result Found for city 'Atlantis'.");

    let content = fs::read_to_string(&result_path).unwrap();
    assert!(content.contains("Text=No Result Found \"Atlantis\""));
    assert!(content.contains("MouseOverAction=[]"));
    assert!(content.contains("MouseLeaveAction=[]"));

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_result_file_fully_overwritten() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();

    // NotFound layout has six lines, Found has five; a stale trailing line
    // would betray an append or partial write
    resolver.handle_command("Execute Atlantis");
    let not_found = fs::read_to_string(&result_path).unwrap();
    assert_eq!(not_found.lines().count(), 6);

    resolver.handle_command("Execute Guangzhou");
    let found = fs::read_to_string(&result_path).unwrap();
    assert_eq!(found.lines().count(), 5);
    assert!(!found.contains("MouseOverAction"));
    assert!(found.contains("Text=Guangzhou,China"));

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_lowercase_command_resolves() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();
    resolver.handle_command("execute tokyo");

    assert_eq!(
        resolver.last_result(),
        "City: tokyo, Country: Japan, Lat: 35.6897, Lng: 139.6922"
    );
    let content = fs::read_to_string(&result_path).unwrap();
    assert!(content.contains("Text=tokyo,Japan"));

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_bad_command_preserves_prior_state() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();

    resolver.handle_command("Execute Delhi");
    let status_before = resolver.last_result().to_string();
    let file_before = fs::read_to_string(&result_path).unwrap();

    resolver.handle_command("Foo Bar");

    assert_eq!(resolver.last_result(), status_before);
    assert_eq!(fs::read_to_string(&result_path).unwrap(), file_before);

    Log::set_enabled(true);
}

#[test]
#[serial]
fn test_integration_found_section_writes_latitude_into_both_keys() {
    Log::set_enabled(false);

    let (_temp_dir, result_path, mut resolver) = create_test_resolver();
    resolver.handle_command("Execute Jakarta");

    let content = fs::read_to_string(&result_path).unwrap();
    // Historical output quirk the consuming skins depend on: the latitude
    // value lands in both the Longitude and Latitude keys
    assert!(content.contains("Variables Longitude \"-6.1750\""));
    assert!(content.contains("Variables Latitude \"-6.1750\""));
    assert!(!content.contains("106.8275"));

    Log::set_enabled(true);
}

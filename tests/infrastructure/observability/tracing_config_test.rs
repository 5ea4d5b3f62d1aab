use auralens::infrastructure::observability::TracingConfig;
use auralens::presentation::Environment;

#[test]
fn given_explicit_values_when_creating_then_fields_are_kept() {
    let config = TracingConfig::new(Environment::Prod, true);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
}

#[test]
fn given_json_requested_by_settings_when_creating_then_json_enabled_for_any_environment() {
    for environment in [Environment::Local, Environment::Test, Environment::Prod] {
        assert!(TracingConfig::new(environment, true).json_format);
    }
}

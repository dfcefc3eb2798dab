use neptune::{util::FakeEnvProvider, NeptuneConfig};
use pretty_assertions::assert_eq;

use crate::config::{Config, Neptune};

#[test]
pub fn config_should_be_deserializable_from_toml() {
    // Arrange
    let toml = r#"
[neptune]
webapp_name = "inventory"
server_url = "http://neptune.local:8080"
# api_base = use default
sap_client = "100"
use_proxy = true
proxy_base = "/relay"
"#;
    // Act
    let config = Config::from_toml(toml).unwrap();
    // Assert
    let neptune = Neptune {
        webapp_name: Some("inventory".into()),
        server_url: Some("http://neptune.local:8080".into()),
        api_base: None,
        sap_client: Some("100".into()),
        use_proxy: Some(true),
        proxy_base: Some("/relay".into()),
    };
    let expected_config = Config {
        neptune: Some(neptune),
    };
    assert_eq!(expected_config, config);
}

#[test]
pub fn config_should_accept_empty_toml() {
    // Act
    let config = Config::from_toml("").unwrap();
    // Assert
    assert_eq!(Config::default(), config);
    assert_eq!(Neptune::default(), config.neptune());
}

#[test]
pub fn config_should_reject_mistyped_values() {
    // Arrange
    let toml = r#"
[neptune]
use_proxy = "yes"
"#;
    // Act
    let config = Config::from_toml(toml);
    // Assert
    assert!(config.is_err(), "use_proxy must be a boolean");
}

#[test]
pub fn create_neptune_config_should_use_file_values_over_defaults() {
    // Arrange
    let config = Config::from_toml(
        r#"
[neptune]
server_url = "http://neptune.local:8080"
use_proxy = true
"#,
    )
    .unwrap();
    let env = FakeEnvProvider::default();
    // Act
    let neptune = config.create_neptune_config(&env);
    // Assert
    assert_eq!("http://neptune.local:8080", neptune.server_url());
    assert!(neptune.use_proxy());
    assert_eq!("/neptune/api", neptune.api_base());
    assert_eq!("800", neptune.sap_client());
}

#[test]
pub fn create_neptune_config_should_prefer_environment_over_file() {
    // Arrange
    let config = Config::from_toml(
        r#"
[neptune]
sap_client = "100"
use_proxy = true
webapp_name = "from_file"
"#,
    )
    .unwrap();
    let env = FakeEnvProvider::new([
        ("VITE_SAP_CLIENT", "200"),
        ("VITE_USE_PROXY", "false"),
        ("VITE_NEPTUNE_WEBAPP_NAME", ""),
    ]);
    // Act
    let neptune = config.create_neptune_config(&env);
    // Assert
    assert_eq!("200", neptune.sap_client());
    assert!(!neptune.use_proxy());
    assert_eq!("from_file", neptune.webapp_name());
}

#[test]
pub fn create_neptune_config_without_file_should_match_plain_environment() {
    // Arrange
    let env = FakeEnvProvider::new([("VITE_PROXY_BASE", "/p")]);
    // Act
    let neptune = Config::default().create_neptune_config(&env);
    // Assert
    assert_eq!(NeptuneConfig::from_env(&env), neptune);
}

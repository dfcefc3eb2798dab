use std::path::PathBuf;

use pretty_assertions::assert_eq;

use crate::{config::NeptuneConfig, util::FakeEnvProvider, webapp::WebappBuild};

#[test]
pub fn default_build_should_deploy_under_smoketest() {
    // Act
    let build = WebappBuild::default();
    // Assert
    assert_eq!("/webapp/smoketest/", build.base_path());
    assert_eq!("dist", build.out_dir());
    assert_eq!("assets", build.assets_dir());
}

#[test]
pub fn from_config_should_use_configured_webapp_name() {
    // Arrange
    let env = FakeEnvProvider::new([("VITE_NEPTUNE_WEBAPP_NAME", "equipment_app")]);
    let config = NeptuneConfig::from_env(&env);
    // Act
    let build = WebappBuild::from_config(&config);
    // Assert
    assert_eq!("/webapp/equipment_app/", build.base_path());
    assert_eq!(
        "/webapp/equipment_app/assets/index-4f2a.js",
        build.asset_url("index-4f2a.js")
    );
}

#[test]
pub fn asset_output_path_should_point_into_assets_dir() {
    // Arrange
    let build = WebappBuild::default();
    // Act
    let path = build.asset_output_path("index.css");
    // Assert
    let expected: PathBuf = ["dist", "assets", "index.css"].iter().collect();
    assert_eq!(expected, path);
}

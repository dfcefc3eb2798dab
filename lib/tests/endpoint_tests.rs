use neptune::{util::FakeEnvProvider, EndpointBuilder, NeptuneConfig, QueryParams, WebappBuild};
use serde_json::json;

#[test]
pub fn searching_equipment_with_default_config_should_hit_neptune_api_directly() {
    // Arrange
    let config = NeptuneConfig::from_env(&FakeEnvProvider::default());
    let sut = EndpointBuilder::new(config);
    // Act
    let url = sut.endpoint_url("equipment", "Search");
    let params = sut.query_params(&QueryParams::new());
    // Assert
    assert_eq!("https://dxp24.co.za:8081/neptune/api/equipment/Search", url);
    assert_eq!(QueryParams::new().with("sap-client", "800"), params);
}

#[test]
pub fn searching_equipment_through_proxy_should_build_parsable_request_url() {
    // Arrange
    let env = FakeEnvProvider::new([
        ("VITE_USE_PROXY", "true"),
        ("VITE_SAP_CLIENT", "100"),
        ("VITE_NEPTUNE_WEBAPP_NAME", "maintenance"),
    ]);
    let config = NeptuneConfig::from_env(&env);
    let sut = EndpointBuilder::new(config.clone());
    let params = QueryParams::new()
        .with("IV_PARAMS", json!({"PLANT": "1000"}))
        .with("IV_SORTBY", "NAME");
    // Act
    let url = sut.request_url("equipment", "Search", &params).unwrap();
    // Assert
    assert_eq!(Some("dxp24.co.za"), url.host_str());
    assert_eq!(Some(8081), url.port());
    assert_eq!(
        "/proxy/dxp24.co.za%3A8081%2Fneptune%2Fapi/equipment/Search",
        url.path()
    );
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        vec![
            ("sap-client".to_string(), "100".to_string()),
            ("IV_PARAMS".to_string(), r#"{"PLANT":"1000"}"#.to_string()),
            ("IV_SORTBY".to_string(), "NAME".to_string()),
        ],
        pairs
    );
    assert_eq!(
        "/webapp/maintenance/",
        WebappBuild::from_config(&config).base_path()
    );
}

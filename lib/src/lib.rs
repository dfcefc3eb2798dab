pub use config::NeptuneConfig;
pub mod config;
pub use endpoint::EndpointBuilder;
pub mod endpoint;
pub mod err;
pub use query::QueryParams;
pub mod query;
pub mod util;
pub use webapp::WebappBuild;
pub mod webapp;

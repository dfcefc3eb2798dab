use std::path::PathBuf;

use crate::config::NeptuneConfig;

#[cfg(test)]
mod tests;

/// Deployment layout of the bundled web app on a Neptune server.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WebappBuild {
    base_path: String,
    out_dir: String,
    assets_dir: String,
}

impl WebappBuild {
    pub const OUT_DIR: &'static str = "dist";
    pub const ASSETS_DIR: &'static str = "assets";

    /// The base path must match the web app name configured in Neptune.
    pub fn from_config(config: &NeptuneConfig) -> Self {
        Self {
            base_path: format!("/webapp/{}/", config.webapp_name()),
            out_dir: Self::OUT_DIR.into(),
            assets_dir: Self::ASSETS_DIR.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }

    pub fn assets_dir(&self) -> &str {
        &self.assets_dir
    }

    /// Public url path of a bundled asset
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}{}/{file}", self.base_path, self.assets_dir)
    }

    /// Where the bundler writes an asset, relative to the project root
    pub fn asset_output_path(&self, file: &str) -> PathBuf {
        [self.out_dir.as_str(), self.assets_dir.as_str(), file]
            .iter()
            .collect()
    }
}
impl Default for WebappBuild {
    fn default() -> Self {
        Self::from_config(&NeptuneConfig::default())
    }
}

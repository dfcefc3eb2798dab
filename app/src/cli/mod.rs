use std::{
    error::Error,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use neptune::{
    err::{EndpointError, QueryError},
    util::EnvProvider,
    EndpointBuilder, QueryParams, WebappBuild,
};

use crate::config::Config;


/// Builds Neptune API urls from the environment and an optional settings file
#[derive(Parser, Debug, PartialEq, Eq, Clone)]
#[command(name = "neptune-cli", version, about, long_about = None)]
pub struct Args {
    /// TOML settings file; environment variables take precedence
    #[arg(short, long = "config", value_name = "FILE", global = true)]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// Print the api base url
    BaseUrl,
    /// Print the url of an operation on an entity
    Endpoint { entity: String, operation: String },
    /// Print the full request url including normalized query parameters
    Request {
        entity: String,
        operation: String,
        /// Query parameters as JSON object
        params: Option<String>,
    },
    /// Print normalized query parameters as JSON
    Params {
        /// Query parameters as JSON object
        params: Option<String>,
    },
    /// Print the webapp build settings
    Build,
}

impl Args {
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// Loads the settings file, if any, and executes the command. Results go to `out`.
pub fn run(args: &Args, env: &dyn EnvProvider, out: &mut dyn io::Write) -> Result<(), CliError> {
    let config = match args.config_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading settings file");
            let toml = fs::read_to_string(path)?;
            Config::from_toml(&toml)?
        }
        None => Config::default(),
    };
    let neptune = config.create_neptune_config(env);
    tracing::debug!(?neptune, "configuration loaded");
    let builder = EndpointBuilder::new(neptune);
    match args.command() {
        Command::BaseUrl => writeln!(out, "{}", builder.base_url())?,
        Command::Endpoint { entity, operation } => {
            writeln!(out, "{}", builder.endpoint_url(entity, operation))?
        }
        Command::Request {
            entity,
            operation,
            params,
        } => {
            let params = parse_params(params.as_deref())?;
            let url = builder.request_url(entity, operation, &params)?;
            writeln!(out, "{url}")?
        }
        Command::Params { params } => {
            let params = builder.query_params(&parse_params(params.as_deref())?);
            writeln!(out, "{}", serde_json::to_string_pretty(&params)?)?
        }
        Command::Build => {
            let build = WebappBuild::from_config(builder.config());
            writeln!(out, "{}", serde_json::to_string_pretty(&build)?)?
        }
    }
    Ok(())
}

fn parse_params(json: Option<&str>) -> Result<QueryParams, QueryError> {
    match json {
        Some(json) => QueryParams::from_json(json),
        None => Ok(QueryParams::new()),
    }
}

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Settings(toml::de::Error),
    Query(QueryError),
    Endpoint(EndpointError),
    Json(serde_json::Error),
}

impl Error for CliError {}
impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Settings(e) => write!(f, "Invalid settings file: {e}"),
            CliError::Query(e) => e.fmt(f),
            CliError::Endpoint(e) => e.fmt(f),
            CliError::Json(e) => write!(f, "Failed to write JSON: {e}"),
        }
    }
}
impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
impl From<toml::de::Error> for CliError {
    fn from(value: toml::de::Error) -> Self {
        Self::Settings(value)
    }
}
impl From<QueryError> for CliError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}
impl From<EndpointError> for CliError {
    fn from(value: EndpointError) -> Self {
        Self::Endpoint(value)
    }
}
impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

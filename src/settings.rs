//! Connection settings for the Postgres store.
//!
//! Values are read with the `config` crate from, in order of precedence:
//!
//! 1. environment variables prefixed `CRUD_PG_` (`CRUD_PG_HOST`, ...);
//! 2. an explicit file, or else the optional `config/postgres.*` and
//!    `<user config dir>/crud/postgres.*` files.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "CRUD_PG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
   #[serde(default = "default_host")]
   pub host: String,
   #[serde(default = "default_port")]
   pub port: u16,
   #[serde(default)]
   pub user: Option<String>,
   #[serde(default)]
   pub password: Option<String>,
   #[serde(default)]
   pub database: Option<String>,
}

fn default_host() -> String {
   "localhost".to_string()
}

fn default_port() -> u16 {
   5432
}

impl Default for DatabaseSettings {
   fn default() -> Self {
      DatabaseSettings {
         host: default_host(),
         port: default_port(),
         user: None,
         password: None,
         database: None,
      }
   }
}

/// Files consulted when no explicit path is given. Neither is required.
pub fn default_sources() -> Vec<PathBuf> {
   let mut sources = vec![PathBuf::from("config/postgres")];
   if let Some(dirs) = ProjectDirs::from("", "", "crud") {
      sources.push(dirs.config_dir().join("postgres"));
   }
   sources
}

impl DatabaseSettings {
   /// Reads settings from `path` (which must exist) or from the default
   /// sources, then applies environment overrides.
   pub fn load(path: Option<&Path>) -> Result<Self> {
      let mut builder = Config::builder();

      match path {
         Some(path) => {
            debug!("reading Postgres settings from {}", path.display());
            builder = builder.add_source(File::from(path));
         }
         None => {
            for source in default_sources() {
               debug!("looking for Postgres settings in {}", source.display());
               builder = builder.add_source(File::from(source).required(false));
            }
         }
      }

      let settings = builder
         .add_source(Environment::with_prefix(ENV_PREFIX))
         .build()?;
      Ok(settings.try_deserialize()?)
   }

   /// Constructs the connection parameters.
   pub fn connection_config(&self) -> postgres::Config {
      let mut params = postgres::Config::new();
      params.host(&self.host).port(self.port);

      if let Some(user) = &self.user {
         params.user(user);
      }
      if let Some(password) = &self.password {
         params.password(password);
      }
      if let Some(database) = &self.database {
         params.dbname(database);
      }

      params
   }

   pub fn connect(&self) -> Result<postgres::Client> {
      Ok(self.connection_config().connect(postgres::NoTls)?)
   }
}

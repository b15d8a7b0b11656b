pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{Console, HttpCustomerApi};
pub use app::Session;
pub use config::toml_config::TomlConfig;
pub use core::form::{ActionOutcome, CustomerForm};
pub use utils::error::{CrudError, Result};

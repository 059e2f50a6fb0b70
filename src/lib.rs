//! Adapter that lets a CI host drive a Trypod source-control backend over
//! plain HTTP and JSON.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod remote;
pub mod services;

pub use config::{Opts, Settings};
pub use error::{RemoteError, Result};
pub use remote::{LoginForm, LoginOutcome, Remote};
pub use services::trypod::TrypodClient;

//! A light-weight single-sink leveled logger.
//!
//! One process-wide logger writes newline-terminated, timestamped lines
//! to an append-mode file or to stdout, gated by a runtime-adjustable
//! severity threshold. Every line is written and flushed under one lock,
//! so concurrent threads never interleave their bytes.
//!
//! # Example
//!
//! ```rust
//! use monolog::*;
//!
//! let _ = recipe::stdout_logger(Severity::Debug).build();
//! log_info!("service starting on port {}", 8080);
//! log_debug!("verbose detail: {:?}", vec![1, 2, 3]);
//! set_level(Severity::Error);
//! shutdown();
//! ```

#[macro_use]
extern crate enum_dispatch;

mod config;
mod env;
mod errors;
mod formatter;
mod level;
mod logger;
mod sink;

pub mod macros;
pub mod parser;
pub mod recipe;

pub use self::{
    config::Config,
    env::{env_or, EnvVarDefault},
    errors::InitError,
    level::{ParseSeverityError, Severity},
    logger::{enabled, init, init_ordinal, set_level, set_level_ordinal, shutdown, threshold},
};

#[doc(hidden)]
pub use self::logger::_private_api_log;

#[cfg(test)]
mod tests;

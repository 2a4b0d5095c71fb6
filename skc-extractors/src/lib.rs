//! All internal logic for retrieving post metadata from the Sankaku servers.

extern crate skc_common;

pub mod auth;
pub mod error;
pub mod extractor_config;
pub mod prelude;
pub mod servers;

//! Static host for the compiled Musterbetrieb site.
//!
//! Serves the frontend bundle and nothing else: no API, no storage, and the
//! contact form never reaches this process.

pub mod config;
pub mod error;
pub mod router;

pub use config::ServerConfig;
pub use error::ServerError;
pub use router::build_router;

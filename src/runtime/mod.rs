//! Runtime support: top-level errors and logging setup
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use shyam_heritage_booking::runtime::*;
//!
//! let _guard = LoggingConfig::new()
//!     .with_level(tracing::Level::DEBUG)
//!     .init()
//!     .expect("logging");
//! ```

pub mod error;
pub mod logging;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;

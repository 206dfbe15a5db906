//! Browser services.
//!
//! # Services
//!
//! - [`conversion`] - Upload and status requests to the backend, poll timer,
//!   signal-backed view sink
//! - [`navigation`] - Download navigation and page reload

pub mod conversion;
pub mod navigation;

pub use conversion::*;
pub use navigation::*;

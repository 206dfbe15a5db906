//! UI Components for the ScoreLift page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Panels (exactly one visible at a time)
//! - [`DropZone`] - PDF drag & drop and file picker
//! - [`ProcessingPanel`] - Spinner with the server's progress message
//! - [`CompletePanel`] - Movement count, download and new conversion
//! - [`ErrorPanel`] - Error message and "Try Again"

mod hero;
mod upload;
mod progress;
mod result;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use result::*;
pub use footer::*;

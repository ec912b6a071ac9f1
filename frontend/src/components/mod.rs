//! UI Components for the Text Extractor.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`ScrollToTop`] - Floating "back to top" panel
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone, file picker and paste handling
//! - [`ResultsSection`] - Status, errors, copy button and extracted files
//! - [`FileItem`] - A single extracted file

mod hero;
mod upload;
mod results;
mod scroll_top;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use scroll_top::*;

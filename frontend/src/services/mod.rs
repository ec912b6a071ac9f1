//! Backend and browser services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to the extraction backend
//! - [`normalizer`] - Turns upload outcomes into results / error messages
//! - [`clipboard`] - "Copy all content" driver and Clipboard API wrapper
//! - [`highlight`] - File name → highlighting language, Prism bridge
//! - [`input`] - File collection from picker, drop and paste events
//!
//! # JavaScript Bindings
//!
//! `src/js/highlight.js` forwards to Prism when it is loaded.

pub mod clipboard;
pub mod highlight;
pub mod input;
pub mod normalizer;
pub mod upload;

pub use clipboard::*;
pub use highlight::*;
pub use input::*;
pub use normalizer::*;
pub use upload::*;

//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use calificar::prelude::*;
//! ```

pub use crate::doc::Document;
pub use crate::error::{CalificarError, Result};
pub use crate::record::{IntMatrix, Status, TestRecord};
pub use crate::render::{render_terminal, render_web, StyleMap};
pub use crate::report::{explain, RenderTarget};
pub use crate::stats::enrich;

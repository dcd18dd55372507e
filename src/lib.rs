//! Calificar: diagnostic reporting for integer matrix-multiplication
//! benchmark records.
//!
//! A kernel under test emits a line-oriented result record on standard
//! output. Calificar parses that record into typed fields, derives
//! performance statistics, and renders a human-readable explanation of the
//! test outcome for either a terminal or a web page.
//!
//! # Quick Start
//!
//! ```
//! use calificar::prelude::*;
//!
//! let raw = "result\tfail\nm\t2\nn\t2\nk\t2\noutput\t[19 22; 43 50]\nlocations\t[0 1; 0 0]";
//! let record = TestRecord::parse(raw).unwrap();
//! let doc = explain(&record, RenderTarget::Terminal);
//! let text = render_terminal(&doc, &StyleMap::plain());
//! assert!(text.contains("19"));
//! ```
//!
//! # Pipeline
//!
//! Raw text → [`record::TestRecord::parse`] → [`stats::enrich`] →
//! [`report::explain`] → [`doc::Document`] → [`render::render_terminal`] or
//! [`render::render_web`].
//!
//! Every stage is a pure transformation over an already-materialized
//! string: no I/O, no shared state, no cross-call caches. Batch callers may
//! explain many records in parallel without any locking.

pub mod doc;
pub mod error;
pub mod prelude;
pub mod record;
pub mod render;
pub mod report;
pub mod stats;

pub use error::{CalificarError, Result};
pub use record::{IntMatrix, Status, TestRecord};

//! # agenda-core
//!
//! Transformation engine for the plenary agenda of the German Bundestag:
//! turns stored agenda records into calendar feeds and structural data
//! exports.
//!
//! Given raw [`AgendaItem`] records, a requested [`Format`], and a set of
//! option flags, the engine filters, derives, and serializes. ISO-week
//! arithmetic, deterministic identifier generation, synthetic companion
//! events, and the format-specific wire rules all live here. HTTP routing,
//! parameter parsing, and the backing store belong to outer collaborators;
//! the engine itself is a synchronous, stateless transformation per call.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_core::{render, FeedOptions, Format};
//! use chrono::Utc;
//!
//! let feed = render(Format::Json, Vec::new(), &FeedOptions::default(), Utc::now()).unwrap();
//! assert_eq!(feed.body, "[]");
//! assert_eq!(feed.content_type, "application/json; charset=utf-8");
//! ```
//!
//! ## Modules
//!
//! - [`model`] -- the agenda item record
//! - [`week`] -- ISO-8601 week arithmetic
//! - [`uid`] -- deterministic identifier generation
//! - [`filter`] -- status-substring filtering
//! - [`calendar`] -- event value objects and the calendar build pass
//! - [`ical`] -- RFC 5545 emission
//! - [`structural`] -- JSON/XML/CSV serializers
//! - [`dispatch`] -- format token mapping and per-call orchestration
//! - [`window`] -- time-window resolution and record selection
//! - [`catalog`] -- available-data listing
//! - [`error`] -- error types

pub mod calendar;
pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod ical;
pub mod model;
pub mod structural;
pub mod uid;
pub mod week;
pub mod window;

pub use dispatch::{render, Feed, FeedOptions, Format};
pub use error::AgendaError;
pub use model::AgendaItem;

//! HeyBo widget core: responsive layout and conversation navigation for the
//! ordering chatbot widget.
//!
//! - [`layout`]: breakpoint resolution, per-tier layout table, layout store
//! - [`navigation`]: flow/stage history and breadcrumbs
//! - [`sync`]: chatbot step ↔ (flow, stage) tables and synchronizer
//! - [`router`]: route → pane content
//! - [`widget`]: session tying the stores together
//!
//! The remaining modules carry configuration, errors, persistence and the
//! terminal driver behind the `heybo-widget` binary.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod router;
pub mod sync;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
pub mod widget;

//! View state for rendering and snapshots.
//!
//! Rendering is a pure function of a [`WidgetViewState`]: the renderer never
//! touches the stores. The same struct serializes to the JSON snapshots the
//! `simulate` command prints.
//!
//! ```text
//! ┌─────────────────┐
//! │  WidgetSession  │
//! │  (owns stores)  │
//! └────────┬────────┘
//!          │ view_state()
//!          ▼
//! ┌─────────────────┐
//! │ WidgetViewState │
//! │ (borrows data)  │
//! └────────┬────────┘
//!          ▼
//!   ui::render / JSON
//! ```

mod widget_view;

pub use widget_view::WidgetViewState;

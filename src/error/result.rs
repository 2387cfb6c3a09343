//! Result type alias for widget operations.

use super::widget_error::WidgetError;

/// Type alias for Results using [`WidgetError`].
///
/// # Example
///
/// ```ignore
/// use heybo_widget::error::WidgetResult;
///
/// fn load_table(path: &Path) -> WidgetResult<LayoutTable> {
///     Ok(LayoutTable::load(path)?)
/// }
/// ```
pub type WidgetResult<T> = Result<T, WidgetError>;

//! Sortable, scrollable multi-column list box.
//!
//! - [`ColumnDef`]: header text, width, data type and visibility per column id.
//! - [`ListItem`] / [`ListRow`]: cell values and the row identity (refcon).
//! - [`sort`]: the row ordering used for every sort pass.
//! - [`ListBox`]: the widget state (rows, sort, selection, scroll window).

mod column;
mod item;
mod list_box;
mod row;
pub mod sort;

pub use column::{ColumnDef, DataType};
pub use item::{ListItem, DEFAULT_PRECISION};
pub use list_box::{ListBox, DEFAULT_LINE_HEIGHT_PCT};
pub use row::ListRow;
pub use sort::Sorting;

pub mod addr;
pub mod document;
pub mod layout;
pub mod text;

pub use document::{Document, Pos};
pub use layout::{ColumnInfo, ROW_HEADER_WIDTH};
pub use text::Align;

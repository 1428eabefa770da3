pub mod list;
pub mod row;
pub mod screen;
pub mod text_field;

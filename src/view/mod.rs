pub mod html;
pub mod row;
pub mod screen;
pub mod text;
pub mod toast;

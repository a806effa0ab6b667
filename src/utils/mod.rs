pub mod calendar;
pub mod debounce;
pub mod format;
pub mod phone;

pub mod date;
pub mod tick;

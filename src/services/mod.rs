// Service module exports

pub mod countdown;
pub mod image;
pub mod settings;

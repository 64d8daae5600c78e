pub mod entities;
pub mod notes;
pub mod services;

pub use entities::*;

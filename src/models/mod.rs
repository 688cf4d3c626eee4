// Module exports for models

pub mod greeting;
pub mod occurrence;
pub mod settings;

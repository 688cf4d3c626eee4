// Service module exports

pub mod assets;
pub mod countdown;
pub mod greeting;
pub mod links;
pub mod settings;

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod manifest;
pub mod sizes;

pub use error::{IconError, Result};
pub use generator::{Generated, GeneratedIcon, generate};
pub use manifest::Manifest;
pub use sizes::{ICON_SIZES, IconSpec, Idiom};

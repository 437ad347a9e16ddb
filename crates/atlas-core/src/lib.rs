pub mod action;
pub mod advisor;
pub mod audit;
pub mod catalog;
pub mod error;
pub mod form;
pub mod params;
pub mod pipeline;
pub mod role;
pub mod session;

pub use error::{AtlasError, Result};

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod prescription;

mod error;
mod exercise;
mod mapping;
mod program;
mod reconcile;
mod routine;
mod service;

pub use error::*;
pub use exercise::*;
pub use mapping::*;
pub use program::*;
pub use reconcile::*;
pub use routine::*;
pub use service::*;

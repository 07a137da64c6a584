//! Catalog of water bodies (lakes, seas, rivers, ponds) with derived
//! area/volume measures, persisted as a five-lines-per-record text file
//! and as a compact length-prefixed binary file.

pub mod binary;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod reservoir;
pub mod text;

pub use catalog::Catalog;
pub use error::{DecodeError, Error, Result};
pub use reservoir::Reservoir;

//! Data module - CSV loading and the in-memory dataset

mod dataset;
mod loader;

pub use dataset::{Dataset, Row};
pub use loader::DataLoader;

//! Data fetching from the public disease-statistics API.

pub mod client;
pub mod payloads;

pub use client::{DiseaseClient, SelectionData, DEFAULT_BASE_URL};

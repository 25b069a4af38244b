//! solace-core
//!
//! Shared vocabulary of the Solace decision support engine: age bands,
//! pain levels, evidence grades, and the age arithmetic every recommender
//! is driven by. Pure and synchronous; no I/O.

pub mod age;
pub mod error;
pub mod models;

pub use models::age::{AgeCategory, AgeInput, AgeProfile};
pub use models::level::{EvidenceLevel, PainLevel};

//! lifescan-core
//!
//! Pure domain types shared by the questionnaire engine, the fallback risk
//! model, the prediction client and the HTTP server. No I/O here.

pub mod error;
pub mod models;

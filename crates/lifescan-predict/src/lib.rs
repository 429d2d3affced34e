//! lifescan-predict
//!
//! Blocking client for the external prediction and chat service, and the
//! submit flow that falls back to the local risk model when the service is
//! unreachable.

pub mod assess;
pub mod client;
pub mod error;

//! LinkTracer Infrastructure Layer
//!
//! Adapters for the application ports: a wire-level DNS exchanger built on
//! `hickory-proto` and an in-memory analysis cache.
pub mod dns;

//! HTTP API Client
//!
//! Functions for communicating with the Tellus REST API.

mod client;

pub use client::*;

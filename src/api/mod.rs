//! Backend API
//!
//! HTTP client functions for the LitFeed backend.

pub mod client;

pub use client::*;

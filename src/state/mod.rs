//! State Management
//!
//! Global application state shared across pages and components.

pub mod global;

pub use global::{provide_global_state, Article, GlobalState, SessionStatus};

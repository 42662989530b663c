//! Pages
//!
//! Top-level page components for each route.

pub mod feed;
pub mod login;
pub mod signup;

pub use feed::Feed;
pub use login::Login;
pub use signup::Signup;

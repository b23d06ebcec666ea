//! HTTP shell over one shared tax estimation session.
//!
//! The server exposes the session operations of
//! [`fedtax_core::Taxpayer`] as small JSON endpoints and serves the
//! bundled browser UI as static files. There is exactly one session per
//! process; see [`state::AppState`].

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints and the
//! current-user lookup:
//!
//! - `POST /api/users/register` - create an account
//! - `POST /api/users/login` - verify credentials, issue a token
//! - `GET /api/users/me` - current user (requires authentication)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current-user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;

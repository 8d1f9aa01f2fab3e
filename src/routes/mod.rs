//! Route Configuration
//!
//! - **`router`** - top-level router assembly (welcome page, CORS, tracing,
//!   404 fallback)
//! - **`api_routes`** - the `/api` route table, split into public routes
//!   and routes behind the token authenticator

/// Top-level router assembly
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;

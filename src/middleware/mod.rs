//! Authentication and authorization middleware.
//!
//! The gate runs in two stages. [`auth::AuthUser`] verifies the bearer token
//! and attaches the claims; [`role`] resolves the claim email's stored role
//! and admits or rejects the request. Routes that only need an identity use
//! the extractor alone; role-gated routes add a `require_*` layer or
//! extractor.

pub mod auth;
pub mod role;

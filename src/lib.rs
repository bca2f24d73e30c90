//! # Camphub API
//!
//! A REST backend for a course-enrollment platform built with Rust, Axum,
//! and MongoDB. Three resources (users, classes, and shopping carts) are
//! exposed over a document store, with JWT bearer authentication and
//! role-gated authorization for admins and instructors, plus a moderation
//! workflow for instructor-submitted classes.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Environment configuration (JWT, database, CORS, gating)
//! ├── middleware/       # Bearer auth extractor and role gates
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Token issuance (/jwt)
//! │   ├── users/       # Signup, role promotion, self-checks
//! │   ├── classes/     # Catalog, instructor submissions, moderation
//! │   └── carts/       # Shopping carts
//! └── utils/           # Errors, token codec, response DTOs
//! ```
//!
//! Each feature module keeps the same structure: `model.rs` (documents and
//! DTOs), `service.rs` (store operations), `controller.rs` (HTTP handlers),
//! `router.rs` (route wiring).
//!
//! ## Authorization
//!
//! Requests pass a two-stage gate: the [`middleware::auth::AuthUser`]
//! extractor verifies the bearer token (401 on any failure), then the role
//! gates in [`middleware::role`] resolve the claim email's stored role and
//! reject with 403 unless it matches. A user with no role record has no
//! privilege; that is a normal state, not an error.
//!
//! Role promotion and class moderation PATCHes are intentionally open by
//! default, matching the deployed behavior of the system this replaces; set
//! `STRICT_GATING=true` to layer the admin gate onto them.
//!
//! ## Environment Variables
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017
//! DATABASE_NAME=camphub
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! STRICT_GATING=false
//! PORT=5000
//! ```
//!
//! ## API Documentation
//!
//! With the server running, interactive documentation is served at
//! `/swagger-ui` and `/scalar`.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

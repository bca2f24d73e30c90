//! MongoDB client initialization.
//!
//! The client is created once at startup and its [`Database`] handle is
//! cloned into the application state for the process lifetime; the driver
//! pools connections internally and the handle is never explicitly closed.
//!
//! # Environment Variables
//!
//! - `MONGODB_URI`: connection string (default `mongodb://localhost:27017`)
//! - `DATABASE_NAME`: database to use (default `camphub`)
//!
//! # Panics
//!
//! [`init_db`] panics when the connection string cannot be parsed. A server
//! that is down at startup does not fail here; the first store round-trip
//! surfaces the error instead.

use mongodb::{Client, Database};
use std::env;

pub async fn init_db() -> Database {
    let uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "camphub".to_string());

    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to initialize MongoDB client");

    client.database(&db_name)
}

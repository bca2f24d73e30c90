pub mod auth;
pub mod carts;
pub mod classes;
pub mod users;

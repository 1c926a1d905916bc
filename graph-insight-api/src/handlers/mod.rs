pub mod classify;
pub mod health;
pub mod path;
pub mod traversal;
pub mod visualize;

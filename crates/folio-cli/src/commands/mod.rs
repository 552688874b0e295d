//! Command implementations.

pub mod blogs;
pub mod overview;
pub mod projects;
pub mod resume;
pub mod search;
pub mod show;
pub mod work;

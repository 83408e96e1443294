//! Data Transfer Objects for the Web API.

pub mod response;

pub use response::*;

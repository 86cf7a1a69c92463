//! Handlers 模块

pub mod auth;
pub mod devices;
pub mod gateways;

pub use auth::*;
pub use devices::*;
pub use gateways::*;

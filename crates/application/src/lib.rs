//! Nameroute Application Layer
pub mod ports;
pub mod services;

pub use ports::{NamingService, ReverseResolver};
pub use services::Resolution;

mod naming_service;

pub use naming_service::{NamingService, ReverseResolver};

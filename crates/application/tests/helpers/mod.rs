mod mock_naming_service;

pub use mock_naming_service::MockNamingService;

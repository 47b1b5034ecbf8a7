#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod quiz_driver;
pub mod timer;
pub mod viewer_session;

pub use catalog_service::CatalogService;
pub use error::CatalogServiceError;
pub use timer::TimerHandle;
pub use viewer_session::ViewerSession;

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod services;

pub use api::{build_router, ApiServer, AppState};
pub use config::{AppConfig, ContactValidation, EasingType, MotionConfig, ServerConfig};
pub use contact::{ContactMessage, ContactStore, ContactSubmission};
pub use error::{Error, FieldError, Result};
pub use services::{catalog, ServiceOffering};

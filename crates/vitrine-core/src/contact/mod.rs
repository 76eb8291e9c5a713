//! Contact form submissions and their volatile in-memory store

mod models;
mod store;

pub use models::{ContactMessage, ContactSubmission, NewContactMessage};
pub use store::ContactStore;

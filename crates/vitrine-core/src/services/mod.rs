//! Static catalog of services offered by the agency

mod catalog;

pub use catalog::{catalog, find, ServiceOffering};

//! Lookup traits (ports) implemented by the application state

mod registry;

pub use registry::{LookupResult, Registry};

//! Table controller and the capabilities it is built from.

pub mod controller;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod options;
pub mod selection;
pub mod viewport;

pub use controller::TableController;
pub use options::{TableAnchors, TableOptions};
pub use viewport::{BreakpointClassifier, ViewportClass, ViewportClassifier, ViewportWidth};

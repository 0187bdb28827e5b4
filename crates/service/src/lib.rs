//! Application services: the operations the surrounding API layer invokes.
//!
//! Each service holds its store gateways and a transaction boundary,
//! constructor-injected; there is no global registry. One call runs as one
//! transaction: all writes commit together or none do.

pub mod lines;
pub mod shipping;

pub use lines::LineService;
pub use shipping::OrderService;

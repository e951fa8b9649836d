pub mod cycle;
pub mod resolve;
pub mod toposort;

pub use cycle::would_create_cycle;
pub use resolve::{dependencies_of, dependents_of};
pub use toposort::topological_order;

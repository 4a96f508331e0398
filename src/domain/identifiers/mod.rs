pub mod component_id;
pub mod validation;

pub use component_id::ComponentId;

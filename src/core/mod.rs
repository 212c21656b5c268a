pub mod summary;

pub use crate::domain::model::{ModuleSpec, ModuleSpecBuilder};
pub use crate::domain::ports::ModuleDescriptor;
pub use crate::utils::error::Result;

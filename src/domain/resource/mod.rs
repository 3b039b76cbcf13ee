//! Resource vocabulary - what can be created and how.

mod creation_mode;
mod resource_type;

pub use creation_mode::CreationMode;
pub use resource_type::{ResourceFamily, ResourceType};

pub mod conversion;
pub mod loader;
pub mod tree;

pub use conversion::*;
pub use tree::*;

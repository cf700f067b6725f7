pub mod index;
pub mod reference;
pub mod resolver;

pub use index::*;
pub use reference::*;
pub use resolver::*;

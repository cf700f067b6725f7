pub mod lookup;
pub mod model;
pub mod parser;

pub use lookup::*;
pub use model::*;
pub use parser::*;

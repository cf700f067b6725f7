pub mod mapper;
pub mod steps;
pub mod types;

pub use mapper::*;
pub use steps::*;
pub use types::*;

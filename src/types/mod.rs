pub mod errors;
pub mod mode;
pub mod ownership;
pub mod report;

pub use errors::*;
pub use mode::*;
pub use ownership::*;
pub use report::*;

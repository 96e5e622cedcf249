pub mod add;
pub mod delete;
pub mod get;

pub use add::*;
pub use delete::*;
pub use get::*;

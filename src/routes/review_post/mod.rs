pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use add::*;
pub use delete::*;
pub use get::*;
pub use list::*;
pub use update::*;

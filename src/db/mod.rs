pub mod comment;
mod error;
pub mod like;
mod pagination;
pub mod product;
pub mod review_post;
pub mod user;

pub use error::StoreError;
pub use pagination::{PageParams, Paginated};

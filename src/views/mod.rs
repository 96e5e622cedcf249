pub mod comment;
pub mod like;
pub mod product;
pub mod review_post;

pub use comment::*;
pub use like::*;
pub use product::*;
pub use review_post::*;

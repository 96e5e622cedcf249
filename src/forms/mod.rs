mod comment;
mod like;
mod product;
mod review_post;

pub use comment::*;
pub use like::*;
pub use product::*;
pub use review_post::*;

pub mod feed;
pub mod like;

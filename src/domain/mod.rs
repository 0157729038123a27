pub mod errors;
pub mod slug;
pub mod tag;

pub mod category;
pub mod errors;
pub mod field;
pub mod pagination;
pub mod slug;

pub mod payload;
pub mod search;
pub mod slug;
pub mod validation;
pub mod visibility;

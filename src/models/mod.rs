mod component;
mod page;

pub use component::*;
pub use page::*;

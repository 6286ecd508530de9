pub mod category;
pub mod link;
pub mod order;
pub mod product;

pub use category::*;
pub use link::*;
pub use order::*;
pub use product::*;

pub mod validate;

mod native;
mod ops;

pub use native::*;
pub use ops::*;

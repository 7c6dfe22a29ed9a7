mod core;
mod parameter;
mod value;

pub use self::core::*;
pub use parameter::*;
pub use value::*;

mod command;
mod error;
mod template;
mod value_object;

pub use command::*;
pub use error::*;
pub use template::*;
pub use value_object::*;

mod input;
mod snowflake;

pub use input::*;
pub use snowflake::*;

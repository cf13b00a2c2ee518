mod parts;
mod short;
mod snowflake;

pub use parts::*;
pub use short::*;
pub use snowflake::*;

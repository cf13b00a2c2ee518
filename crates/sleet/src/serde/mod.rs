mod error;
mod snowflake;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use snowflake::*;

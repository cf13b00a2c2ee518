mod sleep_provider;
mod snowflake;
mod tokio;

#[cfg_attr(docsrs, doc(cfg(feature = "async-tokio")))]
pub use self::sleep_provider::*;
#[cfg_attr(docsrs, doc(cfg(feature = "async-tokio")))]
pub use self::snowflake::*;
#[cfg_attr(docsrs, doc(cfg(feature = "async-tokio")))]
pub use self::tokio::*;

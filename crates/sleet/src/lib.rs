//! Time-ordered, 63-bit Snowflake IDs.
//!
//! Every ID packs four fields, high bits to low:
//!
//! ```text
//!  Bit Index:  63           63 62            22 21             17 16         12 11             0
//!              +--------------+----------------+-----------------+-------------+---------------+
//!  Field:      | reserved (1) | timestamp (41) | datacenter (5)  | worker (5)  | sequence (12) |
//!              +--------------+----------------+-----------------+-------------+---------------+
//! ```
//!
//! The timestamp is measured in milliseconds from a configurable epoch
//! (2022-04-15 00:00:00 local time by default). IDs from one generator are
//! strictly increasing; IDs from generators with distinct
//! `(datacenter_id, worker_id)` pairs never collide.
//!
//! ```
//! use sleet::{BasicSnowflakeGenerator, SnowflakeGenerator};
//!
//! let generator: BasicSnowflakeGenerator = BasicSnowflakeGenerator::default();
//! let a = generator.next_id().unwrap();
//! let b = generator.next_id().unwrap();
//! assert!(a < b);
//!
//! let parts = generator.parse(b);
//! assert_eq!(parts.worker_id, 1);
//! assert_eq!(parts.datacenter_id, 1);
//! ```
//!
//! Pick [`BasicSnowflakeGenerator`] when one thread owns the generator and
//! [`LockSnowflakeGenerator`] when several threads share it. Calling a basic
//! generator from several threads at once would hand out duplicate IDs, so
//! it is deliberately not `Sync`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "async-tokio")]
mod futures;
mod generator;
mod id;
mod layout;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
#[cfg(feature = "async-tokio")]
pub use crate::futures::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::layout::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;

mod basic;
mod budget;
mod interface;
mod lock;
mod mutex;
mod state;
mod status;

pub use basic::*;
pub(crate) use budget::*;
pub use interface::*;
pub use lock::*;
pub(crate) use mutex::*;
pub use state::CLOCK_REGRESSION_TIMEOUT_MS;
pub(crate) use state::GeneratorState;
pub use status::*;

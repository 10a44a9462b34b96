// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod storage;
pub mod tzdb;

pub use clock::{FixedClock, SystemClock};
pub use storage::LocalStorage;
pub use tzdb::ChronoTzDatabase;

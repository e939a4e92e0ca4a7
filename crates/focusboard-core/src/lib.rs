pub mod clock;
pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::{AppConfig, CompletionPolicy, SlugCollisionPolicy};
pub use error::FocusError;
pub use result::FocusResult;
pub use traits::{JsonStoreExt, KeyValueStore, SharedStore, StorageKey};

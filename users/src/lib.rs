mod context;
mod error;
pub mod settings;
pub mod sqlite;
mod users;

pub use context::{Context, Interrupted};
pub use error::{BoxError, Step, StoreError, UsersError, UsersResult};
pub use settings::Settings;
pub use users::*;

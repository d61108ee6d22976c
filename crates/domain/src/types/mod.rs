//! Common data types used throughout the application

mod record;
mod report;
mod session;
mod settings;
mod task;

pub use record::*;
pub use report::*;
pub use session::*;
pub use settings::*;
pub use task::*;

//! Command implementations

mod run;
mod setup;

pub use run::run;
pub use setup::setup;

pub mod actions;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod history;
pub mod preferences;
pub mod recommendation;
pub mod reducer;
pub mod state;

pub use actions::*;
pub use catalog::*;
pub use config::*;
pub use history::*;
pub use preferences::*;
pub use recommendation::*;
pub use reducer::*;
pub use state::*;

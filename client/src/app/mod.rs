//! # Application Wiring
//!
//! - **[`context`]**: [`AppContext`], built once at startup, owns the
//!   dispatcher, the persisted session and every state container
//! - **[`navigation`]**: [`MemoryNavigator`], the default route holder used
//!   for the forced redirect to `/login`

pub mod context;
pub mod navigation;

pub use context::{AppContext, StartupError};
pub use navigation::MemoryNavigator;

//! # Durable Client Storage
//!
//! - [`kv`]: `localStorage`-like key-value backends ([`FileStorage`], [`MemoryStorage`])
//! - [`session`]: the persisted auth session and [`SessionStore`]

pub mod kv;
pub mod session;

pub use kv::{FileStorage, KeyValueStorage, MemoryStorage};
pub use session::{AuthSession, SessionStore, SESSION_STORAGE_KEY};

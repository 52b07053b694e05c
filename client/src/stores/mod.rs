//! # State Containers
//!
//! One container per domain. Each owns a [`StateCell`] holding the last
//! fetched data plus a `loading` flag and an `error` string, and exposes one
//! action per backend operation.
//!
//! ## Action lifecycle
//!
//! ```text
//! action()
//!   ├─ loading = true, error = None        (before the call)
//!   ├─ await resource function
//!   ├─ Ok  → loading = false, apply data   (same write lock)
//!   └─ Err → loading = false, error = extract_error_message(err, fallback)
//! ```
//!
//! Data updates after a successful mutation:
//! - create: [`prepend`] to the collection
//! - queue-removing status change: [`remove_by_id`], order of the rest kept
//! - in-place status change: [`patch_by_id`]
//! - fetch: replace collection and [`PageInfo`] wholesale
//!
//! A handful of actions return `Result` so callers can react (login, register,
//! OTP verification, campaign creation, investment creation, deposit). The rest
//! record the error and return `()`; the caller reads it from the snapshot.
//!
//! A new action overwrites the state of any earlier one still in flight.
//! Responses are applied in the order they resolve.

pub mod admin;
pub mod auth;
pub mod campaign;
pub mod investment;
pub mod kyc;
pub mod wallet;
pub mod withdrawal;

use std::future::Future;

use parking_lot::RwLock;
use shared::{
    AdminUser, BusinessProfile, Campaign, Category, Investment, KycDocument, Page, Withdrawal,
    WalletTransaction,
};

use crate::core::error::{extract_error_message, Result};

pub use admin::AdminStore;
pub use auth::AuthStore;
pub use campaign::CampaignStore;
pub use investment::InvestmentStore;
pub use kyc::KycStore;
pub use wallet::WalletStore;
pub use withdrawal::WithdrawalStore;

/// Read-only view of a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot<D> {
    pub data: D,
    pub loading: bool,
    pub error: Option<String>,
}

/// Container state behind a lock that is never held across an await.
#[derive(Debug, Default)]
pub struct StateCell<D> {
    inner: RwLock<Snapshot<D>>,
}

impl<D: Clone + Default> StateCell<D> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Snapshot::default()),
        }
    }

    pub fn snapshot(&self) -> Snapshot<D> {
        self.inner.read().clone()
    }

    /// Borrow the current data without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.inner.read().data)
    }

    pub fn clear_error(&self) {
        self.inner.write().error = None;
    }

    /// Mutate data outside of an action (local-only changes such as logout).
    pub fn update<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.inner.write().data)
    }

    pub fn reset(&self) {
        *self.inner.write() = Snapshot::default();
    }

    fn begin(&self) {
        let mut state = self.inner.write();
        state.loading = true;
        state.error = None;
    }

    /// Run one action: mark loading, await `call`, then apply the value or record the error.
    pub async fn run<T, R, F>(
        &self,
        action: &'static str,
        fallback: &str,
        call: F,
        apply: impl FnOnce(&mut D, T) -> R,
    ) -> Result<R>
    where
        F: Future<Output = Result<T>>,
    {
        self.begin();
        tracing::debug!(action, "Container action started");

        match call.await {
            Ok(value) => {
                let mut state = self.inner.write();
                state.loading = false;
                Ok(apply(&mut state.data, value))
            }
            Err(e) => {
                let message = extract_error_message(&e, fallback);
                tracing::warn!(action, error = %e, message = %message, "Container action failed");
                {
                    let mut state = self.inner.write();
                    state.loading = false;
                    state.error = Some(message);
                }
                Err(e)
            }
        }
    }
}

/// Pagination cursor of the last fetched page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.number,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            first: page.first,
            last: page.last,
        }
    }
}

/// A fetched page split into items and cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page: PageInfo,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: PageInfo::default(),
        }
    }
}

impl<T> From<Page<T>> for Listing<T> {
    fn from(page: Page<T>) -> Self {
        let info = PageInfo::from(&page);
        Self {
            items: page.content,
            page: info,
        }
    }
}

/// Entities addressed by a numeric backend id.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

identified!(
    AdminUser,
    BusinessProfile,
    Campaign,
    Category,
    Investment,
    KycDocument,
    Withdrawal,
    WalletTransaction,
);

pub fn prepend<T>(items: &mut Vec<T>, item: T) {
    items.insert(0, item);
}

pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i64) {
    items.retain(|item| item.id() != id);
}

/// Replace the entity with the same id. Returns false when it is not present.
pub fn patch_by_id<T: Identified>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

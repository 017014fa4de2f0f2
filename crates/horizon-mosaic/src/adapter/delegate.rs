//! View delegates for rendering heterogeneous list items.
//!
//! A delegate is a unit of rendering logic bound to one kind of item view.
//! Given a data item it decides whether it can render it
//! ([`can_handle`](ViewDelegate::can_handle)), constructs a fresh view handle
//! inside a host-supplied container, and binds item data into an existing
//! handle. The registry selects delegates per item at dispatch time; a single
//! delegate instance is reused across many items and positions, so delegates
//! hold no per-item state.
//!
//! # Type Parameters
//!
//! The host's view abstractions are opaque to this crate:
//!
//! - `D` - the item data type held by the adapter's list
//! - `C` - the container the host hands to [`create_view`](ViewDelegate::create_view)
//!   (the surface new views are constructed into)
//! - `H` - the view handle produced by `create_view` and populated by
//!   [`bind_view`](ViewDelegate::bind_view)
//!
//! # Example
//!
//! ```
//! use horizon_mosaic::adapter::ViewDelegate;
//!
//! enum Row {
//!     Header(String),
//!     Entry(String),
//! }
//!
//! // A trivial host: views are plain strings created into a Vec.
//! struct HeaderDelegate;
//!
//! impl ViewDelegate<Row, Vec<String>, String> for HeaderDelegate {
//!     fn can_handle(&self, item: &Row) -> bool {
//!         matches!(item, Row::Header(_))
//!     }
//!
//!     fn create_view(&self, container: &mut Vec<String>) -> String {
//!         container.push("header slot".into());
//!         String::new()
//!     }
//!
//!     fn bind_view(&self, item: &Row, view: &mut String) {
//!         if let Row::Header(text) = item {
//!             *view = format!("== {text} ==");
//!         }
//!     }
//! }
//! ```

use std::any::Any;
use std::fmt;

/// Stable integer identifier for the delegate that renders a given item kind.
///
/// Ids are assigned by the registry at registration time, sequentially from 0
/// in registration order, and never change for the lifetime of the registry.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewType(u32);

impl ViewType {
    /// Reserved id for the fallback delegate.
    ///
    /// Never assigned by registration, so regular delegates always receive
    /// the contiguous range `0..N`.
    pub const FALLBACK: ViewType = ViewType(u32::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw integer value of this view type.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is the reserved fallback id.
    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fallback() {
            write!(f, "fallback")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Type-erased auxiliary data for a partial rebind.
///
/// Hosts attach payloads to [`bind_view_partial`](ViewDelegate::bind_view_partial)
/// to describe which part of an item changed; delegates that support
/// incremental updates downcast them back to their concrete type.
pub struct BindPayload(Box<dyn Any + Send + Sync>);

impl BindPayload {
    /// Wraps a payload value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Returns the payload if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for BindPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindPayload").finish_non_exhaustive()
    }
}

/// A unit of rendering logic for one kind of list item.
///
/// Delegates are registered with a
/// [`DelegateRegistry`](super::DelegateRegistry), which assigns each one a
/// stable [`ViewType`] and selects among them per item with
/// [`can_handle`](Self::can_handle). Because one instance serves every item it
/// matches, implementations must not cache per-item state between calls.
///
/// # Capability Tests
///
/// `can_handle` is evaluated against items in registration order and the
/// first match wins, so tests may overlap: register a delegate with a narrow
/// test before a broader one to give it priority.
pub trait ViewDelegate<D, C, H>: Send + Sync {
    /// Whether this delegate can render `item`.
    fn can_handle(&self, item: &D) -> bool;

    /// Constructs a new, unbound view handle inside `container`.
    fn create_view(&self, container: &mut C) -> H;

    /// Populates `view` with `item`'s data.
    fn bind_view(&self, item: &D, view: &mut H);

    /// Applies the partial update described by `payloads` to `view`.
    ///
    /// The default implementation ignores the payloads and performs a full
    /// [`bind_view`](Self::bind_view); delegates that support incremental
    /// updates override this.
    fn bind_view_partial(&self, item: &D, view: &mut H, payloads: &[BindPayload]) {
        let _ = payloads;
        self.bind_view(item, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_type_raw_and_fallback() {
        let vt = ViewType::from_index(3);
        assert_eq!(vt.raw(), 3);
        assert!(!vt.is_fallback());

        assert_eq!(ViewType::FALLBACK.raw(), u32::MAX);
        assert!(ViewType::FALLBACK.is_fallback());
    }

    #[test]
    fn test_view_type_display() {
        assert_eq!(ViewType::from_index(7).to_string(), "7");
        assert_eq!(ViewType::FALLBACK.to_string(), "fallback");
    }

    #[test]
    fn test_bind_payload_downcast() {
        let payload = BindPayload::new(42u32);
        assert!(payload.is::<u32>());
        assert!(!payload.is::<String>());
        assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
        assert_eq!(payload.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_partial_bind_defaults_to_full_bind() {
        struct Plain;

        impl ViewDelegate<i32, (), String> for Plain {
            fn can_handle(&self, _item: &i32) -> bool {
                true
            }

            fn create_view(&self, _container: &mut ()) -> String {
                String::new()
            }

            fn bind_view(&self, item: &i32, view: &mut String) {
                *view = item.to_string();
            }
        }

        let delegate = Plain;
        let mut view = String::new();
        delegate.bind_view_partial(&5, &mut view, &[BindPayload::new("ignored")]);
        assert_eq!(view, "5");
    }
}

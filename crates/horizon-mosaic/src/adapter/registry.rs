//! Delegate registry: view-type assignment, matching, and dispatch.
//!
//! The registry holds an ordered table of [`ViewDelegate`]s, assigns each a
//! stable [`ViewType`] at registration, resolves which delegate applies to a
//! given item, and routes create/bind calls to the resolved delegate.
//!
//! # Registration Phase
//!
//! Registration requires `&mut self`; once the registry is handed to an
//! adapter (or otherwise shared), the table can no longer change. Reads of an
//! immutable registry are safe from any number of threads without locking.
//!
//! # Resolution Order
//!
//! [`resolve_view_type`](DelegateRegistry::resolve_view_type) evaluates
//! capability tests in registration order and the **first** match wins.
//! Order is the only priority mechanism: to override a broad delegate for a
//! narrow item kind, register the narrow delegate first. When no delegate
//! matches, the fallback delegate (if installed) is selected under the
//! reserved [`ViewType::FALLBACK`] id.

use std::sync::Arc;

use super::delegate::{BindPayload, ViewDelegate, ViewType};
use super::error::{AdapterError, AdapterResult};

/// An ordered collection of delegates keyed by stable view-type ids.
///
/// The table index is the view-type id: registering N delegates yields ids
/// `0..N` in registration order. An optional fallback delegate lives outside
/// the table under [`ViewType::FALLBACK`].
///
/// # Duplicate Policy
///
/// Registering the *same instance* twice (by `Arc` identity) fails with
/// [`AdapterError::DuplicateDelegate`]. Distinct instances of the same
/// delegate type are allowed; the earlier registration shadows the later one
/// for every item both match.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_mosaic::adapter::{DelegateRegistry, ViewDelegate};
///
/// struct Upper;
///
/// impl ViewDelegate<String, (), String> for Upper {
///     fn can_handle(&self, item: &String) -> bool {
///         item.chars().next().is_some_and(|c| c.is_uppercase())
///     }
///     fn create_view(&self, _container: &mut ()) -> String {
///         String::new()
///     }
///     fn bind_view(&self, item: &String, view: &mut String) {
///         *view = item.to_uppercase();
///     }
/// }
///
/// let mut registry: DelegateRegistry<String, (), String> = DelegateRegistry::new();
/// let upper = registry.register(Arc::new(Upper)).unwrap();
/// assert_eq!(upper.raw(), 0);
///
/// let items = vec!["Widget".to_string()];
/// assert_eq!(registry.resolve_view_type(&items, 0).unwrap(), upper);
/// ```
pub struct DelegateRegistry<D, C, H> {
    /// Registered delegates; the index is the view-type id.
    delegates: Vec<Arc<dyn ViewDelegate<D, C, H>>>,
    /// Catch-all consulted when no registered delegate matches.
    fallback: Option<Arc<dyn ViewDelegate<D, C, H>>>,
}

impl<D, C, H> Default for DelegateRegistry<D, C, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C, H> DelegateRegistry<D, C, H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            delegates: Vec::new(),
            fallback: None,
        }
    }

    /// Registers a delegate and assigns it the next view-type id.
    ///
    /// Ids start at 0 and follow registration order. Registration order is
    /// also resolution priority (see the [module docs](self)).
    ///
    /// # Errors
    ///
    /// [`AdapterError::DuplicateDelegate`] if this instance is already in the
    /// table or installed as the fallback.
    pub fn register(
        &mut self,
        delegate: Arc<dyn ViewDelegate<D, C, H>>,
    ) -> AdapterResult<ViewType> {
        if self.is_known_instance(&delegate) {
            return Err(AdapterError::DuplicateDelegate);
        }

        let view_type = ViewType::from_index(self.delegates.len());
        self.delegates.push(delegate);
        tracing::debug!(
            target: "horizon_mosaic::registry",
            view_type = view_type.raw(),
            "registered delegate"
        );
        Ok(view_type)
    }

    /// Installs the fallback delegate under [`ViewType::FALLBACK`].
    ///
    /// The fallback is consulted only after every registered delegate's
    /// capability test has failed for an item.
    ///
    /// # Errors
    ///
    /// [`AdapterError::DuplicateDelegate`] if a fallback is already installed
    /// or this instance is already registered.
    pub fn set_fallback(
        &mut self,
        delegate: Arc<dyn ViewDelegate<D, C, H>>,
    ) -> AdapterResult<ViewType> {
        if self.fallback.is_some() || self.is_known_instance(&delegate) {
            return Err(AdapterError::DuplicateDelegate);
        }

        self.fallback = Some(delegate);
        tracing::debug!(target: "horizon_mosaic::registry", "installed fallback delegate");
        Ok(ViewType::FALLBACK)
    }

    /// The number of registered delegates, excluding the fallback.
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Whether no delegates are registered (the fallback does not count).
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Whether a fallback delegate is installed.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Resolves the view type for the item at `position`.
    ///
    /// Capability tests run in registration order; the first match wins. With
    /// no match, the fallback's id is returned if one is installed.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::OutOfRange`] if `position >= items.len()`
    /// - [`AdapterError::NoDelegateFound`] if nothing matched and no fallback
    ///   is installed
    pub fn resolve_view_type(&self, items: &[D], position: usize) -> AdapterResult<ViewType> {
        let item = items.get(position).ok_or(AdapterError::OutOfRange {
            position,
            len: items.len(),
        })?;

        for (index, delegate) in self.delegates.iter().enumerate() {
            if delegate.can_handle(item) {
                let view_type = ViewType::from_index(index);
                tracing::trace!(
                    target: "horizon_mosaic::registry",
                    position,
                    view_type = view_type.raw(),
                    "resolved view type"
                );
                return Ok(view_type);
            }
        }

        if self.fallback.is_some() {
            tracing::trace!(
                target: "horizon_mosaic::registry",
                position,
                "no delegate matched, using fallback"
            );
            return Ok(ViewType::FALLBACK);
        }

        Err(AdapterError::NoDelegateFound { position })
    }

    /// Creates a new view handle via the delegate registered for `view_type`.
    ///
    /// # Errors
    ///
    /// [`AdapterError::UnknownViewType`] if the id is not in the table.
    /// Unreachable when callers obtain ids from
    /// [`resolve_view_type`](Self::resolve_view_type) first.
    pub fn create_view(&self, container: &mut C, view_type: ViewType) -> AdapterResult<H> {
        let delegate = self.delegate_for(view_type)?;
        Ok(delegate.create_view(container))
    }

    /// Binds the item at `position` into `view`.
    ///
    /// The delegate is re-resolved from the item's current data, never cached
    /// from creation time, so an item whose kind changed since its view was
    /// created binds through the delegate that matches it *now*.
    ///
    /// # Errors
    ///
    /// Same as [`resolve_view_type`](Self::resolve_view_type).
    pub fn bind_view(&self, items: &[D], position: usize, view: &mut H) -> AdapterResult<()> {
        let delegate = self.resolve_delegate(items, position)?;
        delegate.bind_view(&items[position], view);
        Ok(())
    }

    /// Binds the item at `position` into `view` with auxiliary payloads.
    ///
    /// Resolution behaves exactly like [`bind_view`](Self::bind_view). A
    /// delegate that does not override partial binding performs a full bind.
    pub fn bind_view_partial(
        &self,
        items: &[D],
        position: usize,
        view: &mut H,
        payloads: &[BindPayload],
    ) -> AdapterResult<()> {
        let delegate = self.resolve_delegate(items, position)?;
        delegate.bind_view_partial(&items[position], view, payloads);
        Ok(())
    }

    /// First-match delegate lookup for the item at `position`.
    fn resolve_delegate(
        &self,
        items: &[D],
        position: usize,
    ) -> AdapterResult<&Arc<dyn ViewDelegate<D, C, H>>> {
        let view_type = self.resolve_view_type(items, position)?;
        self.delegate_for(view_type)
    }

    /// Table lookup by id, including the reserved fallback id.
    fn delegate_for(&self, view_type: ViewType) -> AdapterResult<&Arc<dyn ViewDelegate<D, C, H>>> {
        if view_type.is_fallback() {
            return self
                .fallback
                .as_ref()
                .ok_or(AdapterError::UnknownViewType(view_type));
        }

        self.delegates
            .get(view_type.index())
            .ok_or(AdapterError::UnknownViewType(view_type))
    }

    /// Whether `delegate` is already in the table or installed as fallback.
    fn is_known_instance(&self, delegate: &Arc<dyn ViewDelegate<D, C, H>>) -> bool {
        self.delegates
            .iter()
            .chain(self.fallback.as_ref())
            .any(|existing| Arc::ptr_eq(existing, delegate))
    }
}

static_assertions::assert_impl_all!(DelegateRegistry<String, (), ()>: Send, Sync);

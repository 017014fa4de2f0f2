//! Multi-type list adapter.
//!
//! [`MultiTypeAdapter`] owns the backing item list and a
//! [`DelegateRegistry`], forwards the host's dispatch calls (view-type query,
//! create, bind, partial bind) to the registry, and emits a full-invalidate
//! signal after every list mutation.
//!
//! # Invalidation Model
//!
//! Every mutator emits [`AdapterSignals::invalidated`] once, after the list
//! has changed. No diffing is attempted: the host re-queries everything it
//! shows. A host batching several mutations can suppress the intermediate
//! notifications with [`Signal::set_blocked`].

use horizon_mosaic_core::Signal;

use super::delegate::{BindPayload, ViewType};
use super::error::{AdapterError, AdapterResult};
use super::registry::DelegateRegistry;

/// Signals emitted by [`MultiTypeAdapter`].
///
/// Hosts connect to these to stay synchronized with the item list.
pub struct AdapterSignals {
    /// Emitted after any list mutation. The whole visible range must be
    /// re-queried; no finer-grained change information is provided.
    pub invalidated: Signal<()>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            invalidated: Signal::new(),
        }
    }
}

/// A list adapter that renders heterogeneous items through registered
/// delegates.
///
/// The adapter owns its `Vec<D>` exclusively; mutation goes through
/// `&mut self` and this type adds no internal locking. A host that mutates on
/// one thread and dispatches on another supplies its own synchronization (a
/// mutex or a single-writer queue) around the adapter.
///
/// # Dispatch Protocol
///
/// For each position it wants to show, the host calls
/// [`view_type`](Self::view_type) first, then [`create_view`](Self::create_view)
/// with the returned id (when no reusable view of that type exists) and
/// [`bind_view`](Self::bind_view) — within the same dispatch cycle, after the
/// preceding mutation's [`invalidated`](AdapterSignals::invalidated) signal
/// has been fully processed.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_mosaic::adapter::{DelegateRegistry, MultiTypeAdapter, ViewDelegate};
///
/// struct Echo;
///
/// impl ViewDelegate<i32, (), String> for Echo {
///     fn can_handle(&self, _item: &i32) -> bool {
///         true
///     }
///     fn create_view(&self, _container: &mut ()) -> String {
///         String::new()
///     }
///     fn bind_view(&self, item: &i32, view: &mut String) {
///         *view = item.to_string();
///     }
/// }
///
/// let mut registry: DelegateRegistry<i32, (), String> = DelegateRegistry::new();
/// let echo = registry.register(Arc::new(Echo)).unwrap();
///
/// let mut adapter = MultiTypeAdapter::new(registry);
/// adapter.append_all(vec![1, 2, 3]);
///
/// assert_eq!(adapter.item_count(), 3);
/// assert_eq!(adapter.view_type(2).unwrap(), echo);
/// ```
pub struct MultiTypeAdapter<D, C, H> {
    items: Vec<D>,
    registry: DelegateRegistry<D, C, H>,
    signals: AdapterSignals,
}

impl<D, C, H> MultiTypeAdapter<D, C, H> {
    /// Creates an adapter with an empty item list.
    ///
    /// The registry is taken by value: its registration phase ends here.
    pub fn new(registry: DelegateRegistry<D, C, H>) -> Self {
        Self::with_items(registry, Vec::new())
    }

    /// Creates an adapter seeded with `items`.
    pub fn with_items(registry: DelegateRegistry<D, C, H>, items: Vec<D>) -> Self {
        Self {
            items,
            registry,
            signals: AdapterSignals::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch (forwarded to the registry)
    // -------------------------------------------------------------------------

    /// The number of items in the list.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolves the view type for the item at `position`.
    ///
    /// Positions outside `0..item_count()` are a caller contract violation
    /// and fail fast with [`AdapterError::OutOfRange`].
    pub fn view_type(&self, position: usize) -> AdapterResult<ViewType> {
        self.registry.resolve_view_type(&self.items, position)
    }

    /// Creates a view handle for `view_type` inside `container`.
    pub fn create_view(&self, container: &mut C, view_type: ViewType) -> AdapterResult<H> {
        self.registry.create_view(container, view_type)
    }

    /// Binds the item at `position` into `view`, re-resolving the delegate
    /// from the item's current data.
    pub fn bind_view(&self, position: usize, view: &mut H) -> AdapterResult<()> {
        self.registry.bind_view(&self.items, position, view)
    }

    /// Binds the item at `position` into `view` with auxiliary payloads.
    pub fn bind_view_partial(
        &self,
        position: usize,
        view: &mut H,
        payloads: &[BindPayload],
    ) -> AdapterResult<()> {
        self.registry
            .bind_view_partial(&self.items, position, view, payloads)
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The items in render order.
    pub fn items(&self) -> &[D] {
        &self.items
    }

    /// The item at `position`, if in range.
    pub fn item(&self, position: usize) -> Option<&D> {
        self.items.get(position)
    }

    /// The registry this adapter dispatches through.
    pub fn registry(&self) -> &DelegateRegistry<D, C, H> {
        &self.registry
    }

    /// The signals for this adapter.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Mutation (each emits one full-invalidate signal)
    // -------------------------------------------------------------------------

    /// Appends one item to the end of the list.
    pub fn append_one(&mut self, item: D) {
        self.items.push(item);
        self.invalidate("append_one");
    }

    /// Appends all of `items` to the end of the list.
    pub fn append_all(&mut self, items: Vec<D>) {
        self.items.extend(items);
        self.invalidate("append_all");
    }

    /// Replaces the whole list with `items`.
    pub fn set_items(&mut self, items: Vec<D>) {
        self.items = items;
        self.invalidate("set_items");
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidate("clear");
    }

    /// Removes and returns the item at `position`.
    ///
    /// # Errors
    ///
    /// [`AdapterError::OutOfRange`] if `position >= item_count()`; the list
    /// is left untouched and no signal is emitted.
    pub fn remove_at(&mut self, position: usize) -> AdapterResult<D> {
        if position >= self.items.len() {
            return Err(AdapterError::OutOfRange {
                position,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(position);
        self.invalidate("remove_at");
        Ok(removed)
    }

    /// Mutates the item at `position` in place via `f`.
    ///
    /// The closure's result is returned. Emits the invalidate signal after
    /// the mutation, like every other mutator.
    ///
    /// # Errors
    ///
    /// [`AdapterError::OutOfRange`] if `position >= item_count()`.
    pub fn modify<F, R>(&mut self, position: usize, f: F) -> AdapterResult<R>
    where
        F: FnOnce(&mut D) -> R,
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(position)
            .ok_or(AdapterError::OutOfRange { position, len })?;
        let result = f(item);
        self.invalidate("modify");
        Ok(result)
    }

    fn invalidate(&self, operation: &'static str) {
        tracing::debug!(
            target: "horizon_mosaic::adapter",
            operation,
            item_count = self.items.len(),
            "list changed, emitting full invalidate"
        );
        self.signals.invalidated.emit(());
    }
}

static_assertions::assert_impl_all!(MultiTypeAdapter<String, (), ()>: Send, Sync);

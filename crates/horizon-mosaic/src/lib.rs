//! Horizon Mosaic - a delegate-based multi-type list adapter.
//!
//! Heterogeneous list items are rendered by independently-defined
//! [`ViewDelegate`](adapter::ViewDelegate)s, selected per item at dispatch
//! time through a [`DelegateRegistry`](adapter::DelegateRegistry) with
//! stable integer view-type ids. The
//! [`MultiTypeAdapter`](adapter::MultiTypeAdapter) owns the item list and
//! notifies its host of changes with a full-invalidate signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_mosaic::prelude::*;
//!
//! enum Feed {
//!     Section(String),
//!     Story { title: String },
//! }
//!
//! // The host's view abstractions: views are strings created into a Vec.
//! struct SectionDelegate;
//!
//! impl ViewDelegate<Feed, Vec<String>, String> for SectionDelegate {
//!     fn can_handle(&self, item: &Feed) -> bool {
//!         matches!(item, Feed::Section(_))
//!     }
//!     fn create_view(&self, _container: &mut Vec<String>) -> String {
//!         String::new()
//!     }
//!     fn bind_view(&self, item: &Feed, view: &mut String) {
//!         if let Feed::Section(name) = item {
//!             *view = format!("[{name}]");
//!         }
//!     }
//! }
//!
//! struct StoryDelegate;
//!
//! impl ViewDelegate<Feed, Vec<String>, String> for StoryDelegate {
//!     fn can_handle(&self, item: &Feed) -> bool {
//!         matches!(item, Feed::Story { .. })
//!     }
//!     fn create_view(&self, _container: &mut Vec<String>) -> String {
//!         String::new()
//!     }
//!     fn bind_view(&self, item: &Feed, view: &mut String) {
//!         if let Feed::Story { title } = item {
//!             *view = title.clone();
//!         }
//!     }
//! }
//!
//! let mut registry: DelegateRegistry<Feed, Vec<String>, String> = DelegateRegistry::new();
//! registry.register(Arc::new(SectionDelegate)).unwrap();
//! registry.register(Arc::new(StoryDelegate)).unwrap();
//!
//! let mut adapter = MultiTypeAdapter::new(registry);
//! adapter.signals().invalidated.connect(|_| {
//!     // Host would re-query and re-render visible items here.
//! });
//!
//! adapter.append_all(vec![
//!     Feed::Section("Today".into()),
//!     Feed::Story { title: "Mosaic ships".into() },
//! ]);
//!
//! let mut container = Vec::new();
//! for position in 0..adapter.item_count() {
//!     let view_type = adapter.view_type(position).unwrap();
//!     let mut view = adapter.create_view(&mut container, view_type).unwrap();
//!     adapter.bind_view(position, &mut view).unwrap();
//! }
//! ```
//!
//! # Logging
//!
//! The library is instrumented with `tracing`; see
//! [`horizon_mosaic_core::logging`] for targets and subscriber setup.

pub use horizon_mosaic_core::*;

pub mod adapter;
pub mod prelude;

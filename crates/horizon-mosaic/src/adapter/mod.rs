//! Multi-type list adapter built on delegate dispatch.
//!
//! This module provides the types for rendering a list of heterogeneous
//! items, where each kind of item is drawn by an independently-defined
//! delegate. This enables:
//!
//! - Mixing item kinds in one list without a god-object renderer
//! - Adding a new item kind by registering one more delegate
//! - Deterministic, order-based priority when delegates overlap
//!
//! # Core Types
//!
//! - `ViewDelegate`: renders exactly one kind of item
//! - `ViewType`: stable integer id identifying a registered delegate
//! - `DelegateRegistry`: ordered delegate table; matching and dispatch
//! - `MultiTypeAdapter`: owns the item list, forwards dispatch, emits the
//!   invalidate signal on mutation
//! - `BindPayload`: type-erased payload for partial rebinds
//! - `AdapterError`: the dispatch/registration error taxonomy
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐ mutate  ┌───────────────────┐ invalidated ┌──────────┐
//! │     Host     │────────>│  MultiTypeAdapter │────────────>│   Host   │
//! │              │         │     (Vec<D>)      │   signal    │          │
//! └──────────────┘         └───────────────────┘             └──────────┘
//!        │ view_type / create_view / bind_view       │ re-query
//!        v                                           v
//! ┌──────────────────┐  first match   ┌──────────────────────┐
//! │ DelegateRegistry │───────────────>│ ViewDelegate (0..N)  │
//! │  (ViewType ids)  │   can_handle   │ + optional fallback  │
//! └──────────────────┘                └──────────────────────┘
//! ```
//!
//! The host mutates the adapter, receives the full-invalidate signal, then
//! re-queries: `view_type(position)` resolves a delegate through the
//! registry's capability tests, and `create_view`/`bind_view` dispatch to the
//! delegate behind the returned id. Binding re-resolves from current item
//! data every time, so views always reflect what the item is *now*.

mod delegate;
mod error;
mod multi_adapter;
mod registry;

pub use delegate::{BindPayload, ViewDelegate, ViewType};
pub use error::{AdapterError, AdapterResult};
pub use multi_adapter::{AdapterSignals, MultiTypeAdapter};
pub use registry::DelegateRegistry;

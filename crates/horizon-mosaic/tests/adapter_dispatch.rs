//! Integration tests driving the full dispatch cycle the way a rendering
//! host would: mutate, receive the invalidate signal, re-query view types,
//! create views into a container, bind, and partially rebind.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_mosaic::prelude::*;

/// Item model for a small messaging feed.
#[derive(Debug, Clone, PartialEq)]
enum Message {
    DateSeparator(String),
    Incoming { from: String, body: String },
    Outgoing { body: String, delivered: bool },
}

/// The host's container: tracks how many views were created into it.
#[derive(Default)]
struct Surface {
    created: usize,
}

/// The host's view handle.
#[derive(Default, Debug)]
struct Cell {
    text: String,
    delivered_marker: bool,
}

struct SeparatorDelegate;

impl ViewDelegate<Message, Surface, Cell> for SeparatorDelegate {
    fn can_handle(&self, item: &Message) -> bool {
        matches!(item, Message::DateSeparator(_))
    }

    fn create_view(&self, container: &mut Surface) -> Cell {
        container.created += 1;
        Cell::default()
    }

    fn bind_view(&self, item: &Message, view: &mut Cell) {
        if let Message::DateSeparator(date) = item {
            view.text = format!("--- {date} ---");
        }
    }
}

struct IncomingDelegate;

impl ViewDelegate<Message, Surface, Cell> for IncomingDelegate {
    fn can_handle(&self, item: &Message) -> bool {
        matches!(item, Message::Incoming { .. })
    }

    fn create_view(&self, container: &mut Surface) -> Cell {
        container.created += 1;
        Cell::default()
    }

    fn bind_view(&self, item: &Message, view: &mut Cell) {
        if let Message::Incoming { from, body } = item {
            view.text = format!("{from}: {body}");
        }
    }
}

/// Marker payload telling the outgoing delegate only the delivery state
/// changed.
struct DeliveryChanged(bool);

struct OutgoingDelegate;

impl ViewDelegate<Message, Surface, Cell> for OutgoingDelegate {
    fn can_handle(&self, item: &Message) -> bool {
        matches!(item, Message::Outgoing { .. })
    }

    fn create_view(&self, container: &mut Surface) -> Cell {
        container.created += 1;
        Cell::default()
    }

    fn bind_view(&self, item: &Message, view: &mut Cell) {
        if let Message::Outgoing { body, delivered } = item {
            view.text = format!("me: {body}");
            view.delivered_marker = *delivered;
        }
    }

    fn bind_view_partial(&self, item: &Message, view: &mut Cell, payloads: &[BindPayload]) {
        let Some(DeliveryChanged(delivered)) = payloads
            .iter()
            .find_map(|p| p.downcast_ref::<DeliveryChanged>())
        else {
            self.bind_view(item, view);
            return;
        };
        view.delivered_marker = *delivered;
    }
}

fn feed_registry() -> DelegateRegistry<Message, Surface, Cell> {
    let mut registry: DelegateRegistry<Message, Surface, Cell> = DelegateRegistry::new();
    registry.register(Arc::new(SeparatorDelegate)).unwrap();
    registry.register(Arc::new(IncomingDelegate)).unwrap();
    registry.register(Arc::new(OutgoingDelegate)).unwrap();
    registry
}

fn sample_feed() -> Vec<Message> {
    vec![
        Message::DateSeparator("Jun 3".into()),
        Message::Incoming {
            from: "sam".into(),
            body: "lunch?".into(),
        },
        Message::Outgoing {
            body: "omw".into(),
            delivered: false,
        },
    ]
}

/// Renders every position like a host would, returning the bound cells.
fn render_all(adapter: &MultiTypeAdapter<Message, Surface, Cell>, surface: &mut Surface) -> Vec<Cell> {
    (0..adapter.item_count())
        .map(|position| {
            let view_type = adapter.view_type(position).unwrap();
            let mut cell = adapter.create_view(surface, view_type).unwrap();
            adapter.bind_view(position, &mut cell).unwrap();
            cell
        })
        .collect()
}

#[test]
fn full_cycle_renders_each_item_through_its_delegate() {
    let mut adapter = MultiTypeAdapter::new(feed_registry());

    let invalidations = Arc::new(Mutex::new(0usize));
    let recv = invalidations.clone();
    adapter.signals().invalidated.connect(move |_| {
        *recv.lock() += 1;
    });

    adapter.append_all(sample_feed());
    assert_eq!(*invalidations.lock(), 1);

    let mut surface = Surface::default();
    let cells = render_all(&adapter, &mut surface);

    assert_eq!(surface.created, 3);
    assert_eq!(cells[0].text, "--- Jun 3 ---");
    assert_eq!(cells[1].text, "sam: lunch?");
    assert_eq!(cells[2].text, "me: omw");
    assert!(!cells[2].delivered_marker);
}

#[test]
fn view_types_are_stable_across_mutations() {
    let mut adapter = MultiTypeAdapter::new(feed_registry());
    adapter.append_all(sample_feed());

    let outgoing_type = adapter.view_type(2).unwrap();

    // Removing an earlier item shifts positions but never ids: the same
    // delegate answers under the same view type at its new position.
    adapter.remove_at(0).unwrap();
    assert_eq!(adapter.view_type(1).unwrap(), outgoing_type);
}

#[test]
fn partial_rebind_applies_payload_without_full_bind() {
    let mut adapter = MultiTypeAdapter::new(feed_registry());
    adapter.append_all(sample_feed());

    let mut surface = Surface::default();
    let view_type = adapter.view_type(2).unwrap();
    let mut cell = adapter.create_view(&mut surface, view_type).unwrap();
    adapter.bind_view(2, &mut cell).unwrap();
    assert!(!cell.delivered_marker);

    adapter
        .modify(2, |item| {
            if let Message::Outgoing { body, delivered } = item {
                *body = "there in 5".into();
                *delivered = true;
            }
        })
        .unwrap();

    adapter
        .bind_view_partial(2, &mut cell, &[BindPayload::new(DeliveryChanged(true))])
        .unwrap();
    assert!(cell.delivered_marker);
    // The partial path applied only the payload: the bound text is stale,
    // proving no full rebind happened.
    assert_eq!(cell.text, "me: omw");

    // A payload the delegate doesn't understand degrades to a full bind,
    // which picks up the new body.
    adapter
        .bind_view_partial(2, &mut cell, &[BindPayload::new("unrelated")])
        .unwrap();
    assert_eq!(cell.text, "me: there in 5");
    assert!(cell.delivered_marker);
}

#[test]
fn fallback_delegate_renders_unclaimed_items() {
    struct PlaceholderDelegate;

    impl ViewDelegate<Message, Surface, Cell> for PlaceholderDelegate {
        fn can_handle(&self, _item: &Message) -> bool {
            true
        }

        fn create_view(&self, container: &mut Surface) -> Cell {
            container.created += 1;
            Cell::default()
        }

        fn bind_view(&self, _item: &Message, view: &mut Cell) {
            view.text = "(unsupported message)".into();
        }
    }

    // Only separators are registered; everything else hits the fallback.
    let mut registry: DelegateRegistry<Message, Surface, Cell> = DelegateRegistry::new();
    registry.register(Arc::new(SeparatorDelegate)).unwrap();
    registry.set_fallback(Arc::new(PlaceholderDelegate)).unwrap();

    let mut adapter = MultiTypeAdapter::new(registry);
    adapter.append_all(sample_feed());

    assert_eq!(adapter.view_type(1).unwrap(), ViewType::FALLBACK);

    let mut surface = Surface::default();
    let cells = render_all(&adapter, &mut surface);
    assert_eq!(cells[0].text, "--- Jun 3 ---");
    assert_eq!(cells[1].text, "(unsupported message)");
    assert_eq!(cells[2].text, "(unsupported message)");
}

#[test]
fn missing_delegate_surfaces_instead_of_rendering() {
    let mut registry: DelegateRegistry<Message, Surface, Cell> = DelegateRegistry::new();
    registry.register(Arc::new(SeparatorDelegate)).unwrap();

    let mut adapter = MultiTypeAdapter::new(registry);
    adapter.append_all(sample_feed());

    assert_eq!(adapter.view_type(0).unwrap().raw(), 0);
    assert_eq!(
        adapter.view_type(1),
        Err(AdapterError::NoDelegateFound { position: 1 })
    );

    let mut cell = Cell::default();
    assert_eq!(
        adapter.bind_view(1, &mut cell),
        Err(AdapterError::NoDelegateFound { position: 1 })
    );
    assert!(cell.text.is_empty());
}

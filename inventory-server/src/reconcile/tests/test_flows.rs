use super::*;

// ========================================================================
// Order update: line-item reconciliation
// ========================================================================

#[test]
fn test_update_increase_applies_delta_only() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 4)]);
    assert_eq!(amount_of(&manager, &id), 6);

    manager
        .update_order(items_patch(&order_id, vec![item_by_id(&id, 9)]))
        .unwrap();

    // 5 more reserved on top of the 4 already held
    assert_eq!(amount_of(&manager, &id), 1);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&id, "Widget", 9)]);
}

#[test]
fn test_update_decrease_releases_stock() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 8)]);
    assert_eq!(amount_of(&manager, &id), 2);

    manager
        .update_order(items_patch(&order_id, vec![item_by_id(&id, 3)]))
        .unwrap();

    assert_eq!(amount_of(&manager, &id), 7);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&id, "Widget", 3)]);
}

#[test]
fn test_update_zeroed_item_releases_and_leaves_order() {
    let manager = create_test_manager();
    let p1 = seed_product(&manager, "Widget", 10);
    let p2 = seed_product(&manager, "Gadget", 10);
    let order_id = create_order_ok(
        &manager,
        vec![item_by_id(&p1, 4), item_by_id(&p2, 2)],
    );

    manager
        .update_order(items_patch(
            &order_id,
            vec![item_by_id(&p1, 0), item_by_id(&p2, 2)],
        ))
        .unwrap();

    assert_eq!(amount_of(&manager, &p1), 10);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&p2, "Gadget", 2)]);
}

#[test]
fn test_update_omitted_item_is_untouched() {
    let manager = create_test_manager();
    let p1 = seed_product(&manager, "Widget", 10);
    let p2 = seed_product(&manager, "Gadget", 10);
    let order_id = create_order_ok(
        &manager,
        vec![item_by_id(&p1, 4), item_by_id(&p2, 2)],
    );

    // Only p1 is mentioned; p2 keeps its reservation but leaves the
    // persisted set, since the requested set is authoritative.
    manager
        .update_order(items_patch(&order_id, vec![item_by_id(&p1, 6)]))
        .unwrap();

    assert_eq!(amount_of(&manager, &p1), 4);
    assert_eq!(amount_of(&manager, &p2), 8);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&p1, "Widget", 6)]);
}

#[test]
fn test_update_insufficient_stock_skips_items_keeps_fields() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 4)]);

    let patch = OrderPatch {
        id: order_id.clone(),
        destination: Some("Porto".to_string()),
        items: vec![item_by_id(&id, 20)],
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    // Line items untouched, stock untouched, but the field update landed
    assert_eq!(amount_of(&manager, &id), 6);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&id, "Widget", 4)]);
    assert_eq!(order.destination, "Porto");
}

#[test]
fn test_update_moves_reservation_between_products() {
    let manager = create_test_manager();
    let p1 = seed_product(&manager, "Widget", 10);
    let p2 = seed_product(&manager, "Gadget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&p1, 4)]);

    manager
        .update_order(items_patch(
            &order_id,
            vec![item_by_id(&p1, 0), item_by_id(&p2, 3)],
        ))
        .unwrap();

    assert_eq!(amount_of(&manager, &p1), 10);
    assert_eq!(amount_of(&manager, &p2), 7);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&p2, "Gadget", 3)]);
}

#[test]
fn test_update_empty_items_means_no_item_update() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 4)]);

    let patch = OrderPatch {
        id: order_id.clone(),
        destination: Some("Porto".to_string()),
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    assert_eq!(amount_of(&manager, &id), 6);
    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, vec![LineItem::new(&id, "Widget", 4)]);
    assert_eq!(order.destination, "Porto");
}

#[test]
fn test_update_negative_quantity_rejected() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 4)]);

    let result = manager.update_order(items_patch(&order_id, vec![item_by_id(&id, -1)]));
    assert!(matches!(result, Err(ReconcileError::InvalidLineItem(_))));
    assert_eq!(amount_of(&manager, &id), 6);
}

#[test]
fn test_update_missing_order_is_not_found() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);

    let result = manager.update_order(items_patch("missing", vec![item_by_id(&id, 3)]));
    assert!(matches!(result, Err(ReconcileError::NotFound(_))));
    assert_eq!(amount_of(&manager, &id), 10);
}

// ========================================================================
// Order update: fields and latches
// ========================================================================

#[test]
fn test_paid_and_shipped_are_one_way_latches() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    let patch = OrderPatch {
        id: order_id.clone(),
        is_paid: Some(true),
        is_shipped: Some(true),
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    // An explicit false never clears a latched flag
    let patch = OrderPatch {
        id: order_id.clone(),
        is_paid: Some(false),
        is_shipped: Some(false),
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert!(order.is_paid);
    assert!(order.is_shipped);
}

#[test]
fn test_update_invalid_date_is_silently_skipped() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    let patch = OrderPatch {
        id: order_id.clone(),
        destination: Some("Porto".to_string()),
        date: Some(OrderDate { month: 2, day: 40, year: 2026 }),
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.date, valid_date());
    assert_eq!(order.destination, "Porto");
}

#[test]
fn test_update_empty_destination_is_skipped() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    let patch = OrderPatch {
        id: order_id.clone(),
        destination: Some(String::new()),
        ..OrderPatch::default()
    };
    manager.update_order(patch).unwrap();

    let order = manager.get_order(&order_id).unwrap().unwrap();
    assert_eq!(order.destination, "Lisbon");
}

#[test]
fn test_update_orders_batch_is_independent() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 2)]);

    let results = manager.update_orders(vec![
        items_patch("missing", vec![]),
        items_patch(&order_id, vec![item_by_id(&id, 5)]),
    ]);

    assert_eq!(results.len(), 2);
    assert!(matches!(results[0], Err(ReconcileError::NotFound(_))));
    assert!(results[1].is_ok());
    assert_eq!(amount_of(&manager, &id), 5);
}

// ========================================================================
// Queries and reset
// ========================================================================

#[test]
fn test_orders_by_status() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);

    let plain = create_order_ok(&manager, vec![item_by_id(&id, 1)]);
    let paid = create_order_ok(&manager, vec![item_by_id(&id, 1)]);
    let both = create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    manager
        .update_order(OrderPatch {
            id: paid.clone(),
            is_paid: Some(true),
            ..OrderPatch::default()
        })
        .unwrap();
    manager
        .update_order(OrderPatch {
            id: both.clone(),
            is_paid: Some(true),
            is_shipped: Some(true),
            ..OrderPatch::default()
        })
        .unwrap();

    let hits = manager
        .orders_by_status(OrderStatusFilter { paid: true, shipped: true })
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, both);

    let hits = manager
        .orders_by_status(OrderStatusFilter { paid: true, shipped: false })
        .unwrap();
    let mut ids: Vec<&str> = hits.iter().map(|o| o.id.as_str()).collect();
    ids.sort();
    let mut expected = vec![paid.as_str(), both.as_str()];
    expected.sort();
    assert_eq!(ids, expected);

    let hits = manager.orders_by_status(OrderStatusFilter::default()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, plain);
}

#[test]
fn test_orders_by_ids_skips_unknown() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    let order_id = create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    let orders = manager
        .orders_by_ids(&[order_id.clone(), "missing".to_string()])
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
}

#[test]
fn test_clear_wipes_both_stores() {
    let manager = create_test_manager();
    let id = seed_product(&manager, "Widget", 10);
    create_order_ok(&manager, vec![item_by_id(&id, 1)]);

    manager.clear().unwrap();

    assert!(manager.products_by_ids(&[id]).unwrap().is_empty());
    assert!(manager.orders_by_status(OrderStatusFilter::default()).unwrap().is_empty());

    // The catalog is usable again after a reset
    let id = seed_product(&manager, "Widget", 2);
    assert_eq!(amount_of(&manager, &id), 2);
}

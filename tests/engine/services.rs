//! Lifecycle of each service over a seeded repository.

use crate::common::*;

#[test]
fn master_service_every_kind() {
    let repo = TestRepo::new();
    repo.seed_all();
    let service = repo.master();

    assert_eq!(service.get_rack("rack-1").unwrap().drawers_per_row, 6);
    assert_eq!(service.list_drawers().unwrap().len(), 2);
    assert_eq!(service.get_category("cat-cap").unwrap().name, "Capacitors");
    assert_eq!(service.list_manufacturers().unwrap().len(), 1);
    assert_eq!(
        service.get_location("loc-1").unwrap().description.as_deref(),
        Some("Über dem Lötplatz")
    );

    service
        .create_manufacturer(Manufacturer {
            id: "mfg-2".to_string(),
            name: "Murata".to_string(),
        })
        .unwrap();
    service
        .update_tag(Tag {
            id: "smd".to_string(),
            name: "Surface mount".to_string(),
        })
        .unwrap();
    service.delete_drawer("drawer-a").unwrap();

    assert_eq!(
        ids(&service.list_manufacturers().unwrap()),
        vec!["mfg-1", "mfg-2"]
    );
    assert_eq!(service.get_tag("smd").unwrap().name, "Surface mount");
    assert_eq!(ids(&service.list_drawers().unwrap()), vec!["drawer-b"]);
}

#[test]
fn movement_service_is_period_scoped() {
    let repo = TestRepo::new();
    repo.seed_all();
    let service = repo.movements();

    assert_eq!(
        service.get_stock_movement("202401", "mov-1").unwrap().note.as_deref(),
        Some("Initial stock")
    );
    assert!(service
        .get_stock_movement("202401", "mov-9")
        .unwrap_err()
        .is_not_found());

    service
        .create_stock_movement("202401", stock_movement("mov-3", 0))
        .unwrap();
    assert_eq!(
        ids(&service.list_stock_movements("202401").unwrap()),
        vec!["mov-1", "mov-2", "mov-3"]
    );

    let mut adjustment = service.get_adjustment("202401", "adj-1").unwrap();
    adjustment.delta = -3;
    service.update_adjustment("202401", adjustment).unwrap();
    assert_eq!(service.get_adjustment("202401", "adj-1").unwrap().delta, -3);
    service.delete_adjustment("202401", "adj-1").unwrap();
    assert!(service.list_adjustments("202401").unwrap().is_empty());

    let reservation = Reservation {
        id: "res-2".to_string(),
        part_id: "part-1".to_string(),
        qty: 2,
        status: "open".to_string(),
        timestamp: "2024-01-12T12:00:00Z".to_string(),
        note: Some("Prototype".to_string()),
    };
    service.create_reservation(reservation.clone()).unwrap();
    assert_eq!(service.get_reservation("res-2").unwrap(), reservation);
    service.delete_reservation("res-1").unwrap();
    assert_eq!(ids(&service.list_reservations().unwrap()), vec!["res-2"]);
}

#[test]
fn index_service_category_and_drawer() {
    let repo = TestRepo::new();
    repo.seed_all();
    let service = repo.indexes();

    service
        .update_parts_by_category(PartsByCategory {
            category_id: "cat-cap".to_string(),
            part_ids: vec!["part-2".to_string(), "part-4".to_string()],
        })
        .unwrap();
    assert_eq!(
        ids(&service.list_parts_by_category().unwrap()),
        vec!["cat-res", "cat-cap"]
    );

    service
        .create_parts_by_drawer(PartsByDrawer {
            drawer_id: "drawer-b".to_string(),
            part_ids: vec!["part-2".to_string()],
        })
        .unwrap();
    service.delete_parts_by_drawer("drawer-a").unwrap();
    assert_eq!(
        service.get_parts_by_drawer("drawer-b").unwrap().part_ids,
        vec!["part-2"]
    );
}

//! Vendor directory tests

use pretty_assertions::assert_eq;
use vendorbook::*;

fn ids(records: &[&VendorRecord]) -> Vec<VendorId> {
    records.iter().map(|r| r.id).collect()
}

fn names(dir: &VendorDirectory) -> Vec<String> {
    dir.iter().map(|r| r.name.clone()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Listing and Search
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_list_without_filter_returns_all_in_order() {
    let dir = VendorDirectory::seeded();
    let all = dir.list(None);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Proveedor A");
    assert_eq!(all[1].name, "Proveedor B");
    assert_eq!(dir.list(Some("")), all);
}

#[test]
fn test_list_filters_case_insensitively() {
    let dir = VendorDirectory::seeded();
    assert_eq!(dir.list(Some("prov")).len(), 2);
    assert_eq!(dir.list(Some("PROVEEDOR B")).len(), 1);
    assert!(dir.list(Some("zzz")).is_empty());
}

#[test]
fn test_list_matches_email() {
    let mut dir = VendorDirectory::new();
    let acme = dir
        .create(VendorDraft::new("Acme").email("orders@acme.test"))
        .unwrap();
    dir.create(VendorDraft::new("Globex")).unwrap();

    assert_eq!(ids(&dir.list(Some("ACME.TEST"))), vec![acme.id]);
}

#[test]
fn test_list_ignores_phone_and_address() {
    let dir = VendorDirectory::seeded();
    assert!(dir.list(Some("555-0101")).is_empty());
    assert!(dir.list(Some("Calle")).is_empty());
}

#[test]
fn test_list_is_idempotent() {
    let dir = VendorDirectory::seeded();
    assert_eq!(dir.list(None), dir.list(None));
    assert_eq!(dir.list(Some("a")), dir.list(Some("a")));
}

#[test]
fn test_search_with_prebuilt_filter() {
    let dir = VendorDirectory::seeded();
    let filter = VendorFilter::from("dor a");
    let found: Vec<&VendorRecord> = dir.search(&filter).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Proveedor A");
}

// ═══════════════════════════════════════════════════════════════════════
// Create
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_create_appends_and_returns_record() {
    let mut dir = VendorDirectory::seeded();
    let created = dir
        .create(
            VendorDraft::new("Proveedor C")
                .email("c@example.com")
                .phone("555-0103")
                .address("Plaza 3"),
        )
        .unwrap();

    assert_eq!(dir.len(), 3);
    assert_eq!(dir.list(None).last(), Some(&&created));
    assert_eq!(dir.get(created.id), Some(&created));
    assert_eq!(created.email.as_deref(), Some("c@example.com"));
}

#[test]
fn test_create_assigns_distinct_ids() {
    let mut dir = VendorDirectory::seeded();
    let a = dir.create(VendorDraft::new("A")).unwrap();
    let b = dir.create(VendorDraft::new("B")).unwrap();

    let mut all: Vec<VendorId> = dir.iter().map(|r| r.id).collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), dir.len());
    assert!(a.id < b.id);
}

#[test]
fn test_create_rejects_empty_name() {
    let mut dir = VendorDirectory::seeded();
    let before = dir.snapshot();

    for name in ["", "   "] {
        let err = dir.create(VendorDraft::new(name)).unwrap_err();
        assert!(matches!(err, DirectoryError::Validation { field: "name", .. }));
    }

    assert_eq!(dir.snapshot(), before);
}

#[test]
fn test_create_after_last_id_fails_without_change() {
    let mut dir = VendorDirectory::with_config(DirectoryConfig::empty().with_first_id(u64::MAX));
    let last = dir.create(VendorDraft::new("A")).unwrap();
    let before = dir.snapshot();

    let err = dir.create(VendorDraft::new("B")).unwrap_err();

    assert!(matches!(err, DirectoryError::IdsExhausted { .. }));
    assert_eq!(dir.snapshot(), before);
    assert_eq!(dir.list(None)[0].id, last.id);
}

#[test]
fn test_create_trims_fields() {
    let mut dir = VendorDirectory::new();
    let created = dir
        .create(VendorDraft::new("  Acme ").email(" ").phone(" 555 "))
        .unwrap();
    assert_eq!(created.name, "Acme");
    assert_eq!(created.email, None);
    assert_eq!(created.phone.as_deref(), Some("555"));
}

// ═══════════════════════════════════════════════════════════════════════
// Update
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_update_replaces_fields_in_place() {
    let mut dir = VendorDirectory::seeded();
    let first = dir.list(None)[0].id;

    let updated = dir.update(first, VendorDraft::new("X")).unwrap();

    assert_eq!(updated.id, first);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, None);
    assert_eq!(dir.position(first), Some(0));
    assert_eq!(names(&dir), vec!["X", "Proveedor B"]);

    let matching: Vec<&VendorRecord> = dir.iter().filter(|r| r.id == first).collect();
    assert_eq!(matching.len(), 1);
}

#[test]
fn test_update_unknown_id() {
    let mut dir = VendorDirectory::seeded();
    let before = dir.snapshot();

    let err = dir
        .update(VendorId::new(999), VendorDraft::new("X"))
        .unwrap_err();

    assert_eq!(err, DirectoryError::NotFound { id: VendorId::new(999) });
    assert_eq!(dir.snapshot(), before);
}

#[test]
fn test_update_rejects_empty_name() {
    let mut dir = VendorDirectory::seeded();
    let before = dir.snapshot();
    let id = before[1].id;

    let err = dir.update(id, VendorDraft::new(" ").email("x@y")).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(dir.snapshot(), before);
}

// ═══════════════════════════════════════════════════════════════════════
// Delete
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_create_then_delete() {
    let mut dir = VendorDirectory::seeded();
    let created = dir.create(VendorDraft::new("Temp")).unwrap();

    dir.delete(created.id).unwrap();

    assert!(!ids(&dir.list(None)).contains(&created.id));
    assert!(dir.list(Some("temp")).is_empty());
    assert_eq!(dir.get(created.id), None);
    assert_eq!(dir.len(), 2);
}

#[test]
fn test_delete_keeps_order_of_rest() {
    let mut dir = VendorDirectory::new();
    let a = dir.create(VendorDraft::new("A")).unwrap();
    let b = dir.create(VendorDraft::new("B")).unwrap();
    let c = dir.create(VendorDraft::new("C")).unwrap();

    dir.delete(b.id).unwrap();

    assert_eq!(ids(&dir.list(None)), vec![a.id, c.id]);
}

#[test]
fn test_delete_unknown_id() {
    let mut dir = VendorDirectory::seeded();
    let before = dir.snapshot();

    let err = dir.delete(VendorId::new(42)).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(dir.snapshot(), before);
}

#[test]
fn test_delete_twice() {
    let mut dir = VendorDirectory::seeded();
    let id = dir.list(None)[0].id;
    dir.delete(id).unwrap();
    assert!(dir.delete(id).unwrap_err().is_not_found());
}

// ═══════════════════════════════════════════════════════════════════════
// Construction and Snapshot
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_seed_matches_seed_vendors() {
    let dir = VendorDirectory::seeded();
    let drafts: Vec<VendorDraft> = dir.iter().map(VendorRecord::to_draft).collect();
    assert_eq!(drafts, seed_vendors());
}

#[test]
fn test_config_without_seed() {
    let dir = VendorDirectory::with_config(DirectoryConfig::new().with_seed(false));
    assert!(dir.is_empty());
}

#[test]
fn test_seeded_ids_follow_first_id() {
    let dir = VendorDirectory::with_config(DirectoryConfig::new().with_first_id(10));
    let ids: Vec<u64> = dir.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn test_into_iterator_matches_iter() {
    let dir = VendorDirectory::seeded();
    let via_ref: Vec<&VendorRecord> = (&dir).into_iter().collect();
    assert_eq!(via_ref, dir.iter().collect::<Vec<_>>());
}

#[test]
fn test_json_snapshot_shape() {
    let mut dir = VendorDirectory::new();
    dir.create(VendorDraft::new("Acme").phone("555")).unwrap();

    let value: serde_json::Value = serde_json::from_str(&dir.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": 1, "name": "Acme", "phone": "555" }])
    );
}

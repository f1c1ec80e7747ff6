use chain::{ProvenanceRecord, ProvenanceStore};
use types::{AddressKind, HandlerName, SlotAddress};

#[test]
fn test_record_overwrites_only_its_own_slot() {
    let mut store = ProvenanceStore::new();
    let first = ProvenanceRecord {
        short_lived: SlotAddress::new(0x30),
        long_lived: SlotAddress::new(0x300),
    };
    let second = ProvenanceRecord {
        short_lived: SlotAddress::new(0x20),
        long_lived: SlotAddress::new(0x400),
    };

    assert_eq!(store.record(HandlerName::Foo, first), None);
    store.record(HandlerName::Bar, first);
    assert_eq!(store.record(HandlerName::Foo, second), Some(first));

    assert_eq!(store.get(HandlerName::Foo), Some(&second));
    assert_eq!(store.get(HandlerName::Bar), Some(&first));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_record_reads_as_null() {
    let store = ProvenanceStore::new();
    assert!(store.is_empty());
    assert_eq!(store.address(HandlerName::Boo, AddressKind::ShortLived), SlotAddress::NULL);
    assert_eq!(store.address(HandlerName::Boo, AddressKind::LongLived), SlotAddress::NULL);
}

#[test]
fn test_iter_follows_handler_order() {
    let mut store = ProvenanceStore::new();
    let rec = ProvenanceRecord {
        short_lived: SlotAddress::new(1),
        long_lived: SlotAddress::new(2),
    };
    store.record(HandlerName::Boo, rec);
    store.record(HandlerName::Foo, rec);

    let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![HandlerName::Foo, HandlerName::Boo]);
}

#[test]
fn test_dump_lists_every_handler() {
    let mut store = ProvenanceStore::new();
    store.record(
        HandlerName::Bar,
        ProvenanceRecord {
            short_lived: SlotAddress::new(0xfeec),
            long_lived: SlotAddress::new(0x810),
        },
    );

    let mut out = Vec::new();
    store.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    println!("{}", text);

    assert!(text.starts_with("--- Provenance Dump ---\n"));
    assert!(text.contains("foo  (never run)"));
    assert!(text.contains("bar  stack_addr = 0xfeec"));
    assert!(text.contains("heap_addr = 0x810"));
    assert!(text.contains("boo  (never run)"));
}

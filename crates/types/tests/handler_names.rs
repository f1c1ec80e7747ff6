use types::{AddressKind, HandlerName, SlotAddress};

#[test]
fn test_lookup_is_exact() {
    assert_eq!(HandlerName::lookup("foo"), Some(HandlerName::Foo));
    assert_eq!(HandlerName::lookup("bar"), Some(HandlerName::Bar));
    assert_eq!(HandlerName::lookup("boo"), Some(HandlerName::Boo));
    assert_eq!(HandlerName::lookup("Foo"), None);
    assert_eq!(HandlerName::lookup("fo"), None);
    assert_eq!(HandlerName::lookup(""), None);
}

#[test]
fn test_indices_are_dense() {
    for (i, name) in HandlerName::ALL.into_iter().enumerate() {
        assert_eq!(name.index(), i);
        assert_eq!(HandlerName::lookup(name.as_str()), Some(name));
    }
}

#[test]
fn test_addresses_order_by_value() {
    let low = SlotAddress::new(0x810);
    let high = SlotAddress::from(0xfeec_usize);
    assert!(low < high);
    assert!(SlotAddress::NULL < low);
    assert_eq!(low.distance(high), 0xfeec - 0x810);
    assert_eq!(high.checked_sub(0xfeec), Some(SlotAddress::NULL));
    assert_eq!(SlotAddress::new(usize::MAX).checked_add(1), None);
}

#[test]
fn test_labels() {
    assert_eq!(AddressKind::ShortLived.label(), "stack_addr");
    assert_eq!(AddressKind::LongLived.label(), "heap_addr");
    assert_eq!(format!("[{:<4}]", HandlerName::Foo), "[foo ]");
}

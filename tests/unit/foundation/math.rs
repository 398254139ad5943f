use super::*;

#[test]
fn fnv_empty_input_is_offset_basis() {
    let h = Fnv1a64::new_default();
    assert_eq!(h.finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn fnv_known_digest() {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"test@example.com");
    assert_eq!(h.finish(), 0x67d7_2223_300e_8928);
}

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"wavatar");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"wav");
    b.write_bytes(b"atar");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_is_order_sensitive() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"ab");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"ba");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mul_div255_edges() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(255, 0), 0);
    assert_eq!(mul_div255(128, 255), 128);
}

//! Golden snapshot of the registered reflective surface.
//!
//! The scenarios resolve everything by canonical name and exact parameter shape, so the
//! registered surface (names, kinds, capability sets, signatures) is itself a contract.
//! This locks it in a reviewed snapshot; changes go through `cargo insta review`.

use jukebox::media_registry;

#[test]
fn the_media_surface_is_stable() {
    let registry = media_registry();
    insta::assert_snapshot!("media_surface", registry.describe());
}

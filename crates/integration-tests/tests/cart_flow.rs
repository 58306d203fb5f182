//! Cross-page cart behaviour.
//!
//! Two `PageSession`s over clones of one `MemoryStore` model two
//! independently-loaded pages sharing the browser's persisted storage:
//! no shared memory, read-before-use on every operation.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use stride_core::FilterConfig;
use stride_storefront::storage::StringStore;
use stride_storefront::{MemoryStore, PageSession, StorefrontConfig};

use stride_integration_tests::{RecordingSurface, SurfaceEvent, demo_catalog, init_tracing};

type Session = PageSession<MemoryStore, RecordingSurface>;

fn page(store: MemoryStore) -> (Session, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::new());
    let session = PageSession::new(
        store,
        Arc::clone(&surface),
        Arc::new(demo_catalog()),
        StorefrontConfig::default(),
    );
    (session, surface)
}

fn catalog_product(id: &str) -> stride_core::Product {
    demo_catalog()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("no such fixture product: {id}"))
}

#[tokio::test]
async fn test_badge_is_identical_across_pages() {
    init_tracing();
    let store = MemoryStore::new();
    let (listing_page, listing_surface) = page(store.clone());
    let (cart_page, cart_surface) = page(store);

    listing_page
        .on_add_to_cart(&catalog_product("aero-glide-2"), 2)
        .unwrap();
    listing_page
        .on_add_to_cart(&catalog_product("split-visor"), 1)
        .unwrap();

    // The other page re-reads persisted state on load and agrees.
    cart_page.on_load().unwrap();
    assert_eq!(listing_surface.last_count(), Some(3));
    assert_eq!(cart_surface.last_count(), Some(3));
}

#[tokio::test]
async fn test_adds_on_two_pages_merge_by_id() {
    init_tracing();
    let store = MemoryStore::new();
    let (page_a, _) = page(store.clone());
    let (page_b, surface_b) = page(store);

    let product = catalog_product("aero-glide-2");
    page_a.on_add_to_cart(&product, 2).unwrap();
    page_b.on_add_to_cart(&product, 3).unwrap();

    // One line, quantity 5 - not two duplicate lines.
    page_b.refresh_cart().unwrap();
    let cart_view = surface_b
        .events()
        .into_iter()
        .rev()
        .find_map(|event| match event {
            SurfaceEvent::Cart(view) => Some(view),
            _ => None,
        })
        .expect("cart was rendered");
    assert_eq!(cart_view.items.len(), 1);
    assert_eq!(cart_view.item_count, 5);
}

#[tokio::test]
async fn test_corrupt_persisted_cart_resets_once() {
    init_tracing();
    let store = MemoryStore::new();
    store.set("stride.cart", "invalid{json}").unwrap();

    let (session, surface) = page(store.clone());
    session.on_load().unwrap();
    assert_eq!(surface.last_count(), Some(0));
    // The corrupt blob was cleared, so the next page load starts clean.
    assert_eq!(store.get("stride.cart").unwrap(), None);

    let (second, second_surface) = page(store);
    second.on_load().unwrap();
    assert_eq!(second_surface.last_count(), Some(0));
}

#[tokio::test]
async fn test_markup_in_product_name_renders_as_text() {
    init_tracing();
    let store = MemoryStore::new();
    let (session, surface) = page(store);

    let payload = serde_json::json!({
        "id": "sneaky",
        "name": "<script>alert('cart')</script>",
        "price": 9.99,
    });
    session.on_add_untrusted(&payload, 1).unwrap();
    session.refresh_cart().unwrap();

    let cart_view = surface
        .events()
        .into_iter()
        .find_map(|event| match event {
            SurfaceEvent::Cart(view) => Some(view),
            _ => None,
        })
        .expect("cart was rendered");
    let name = &cart_view.items.first().unwrap().name;
    assert!(!name.contains('<'), "markup must never survive to display");
    assert!(name.contains("&lt;script&gt;"));
}

#[tokio::test(start_paused = true)]
async fn test_filter_on_one_page_does_not_touch_the_other() {
    init_tracing();
    let store = MemoryStore::new();
    let (listing_page, listing_surface) = page(store.clone());
    let (cart_page, cart_surface) = page(store);

    listing_page.on_filter_change(FilterConfig::default());
    tokio::time::sleep(StorefrontConfig::default().debounce_window * 2).await;
    tokio::task::yield_now().await;

    assert_eq!(listing_surface.grids().len(), 1);
    assert!(cart_surface.grids().is_empty());
    drop(cart_page);
}

use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryTokenStore::with_token("first");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_removes_value() {
    let store = MemoryTokenStore::with_token("tok");
    store.clear();
    assert_eq!(store.get(), None);
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn browser_store_keeps_key() {
    let store = BrowserTokenStore::new("token");
    assert_eq!(store.key(), "token");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_empty_outside_browser() {
    let store = BrowserTokenStore::new("token");
    store.set("tok");
    assert_eq!(store.get(), None);
    store.clear();
}

#[test]
fn storage_failure_is_reported_not_swallowed() {
    assert!(note_storage_result::<String>("persist", "token", Ok(())));
    assert!(!note_storage_result("clear", "token", Err("QuotaExceededError".to_owned())));
}

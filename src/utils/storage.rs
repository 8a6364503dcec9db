//! Best-effort key/value storage. Browser localStorage on wasm; a
//! thread-local map on native builds so host tests exercise the same API.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                log::warn!("localStorage is unavailable");
                None
            }
        }
    }

    pub fn read(key: &str) -> Option<String> {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("failed to read storage key {}", key);
                None
            }
        }
    }

    pub fn write(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to write storage key {}", key);
            }
        }
    }

    pub fn delete(key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove storage key {}", key);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn delete(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub use backend::{delete, read, write};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn write_read_delete_round_trip() {
        write("storage-test", "value");
        assert_eq!(read("storage-test").as_deref(), Some("value"));
        delete("storage-test");
        assert_eq!(read("storage-test"), None);
    }

    #[test]
    fn read_missing_key_returns_none() {
        assert_eq!(read("never-written"), None);
    }
}

use std::sync::Mutex;

use studio_core::Navigator;
use url::Url;

/// Owns the live URL for the page, standing in for the browser address bar.
pub struct AddressBar {
    current: Mutex<Url>,
}

impl AddressBar {
    pub fn new(url: Url) -> Self {
        Self {
            current: Mutex::new(url),
        }
    }

    pub fn current(&self) -> Url {
        self.current.lock().expect("lock address bar").clone()
    }
}

impl Navigator for AddressBar {
    /// Replaces the visible URL with the bare path. Query and fragment are
    /// dropped; replacing an already-bare URL changes nothing.
    fn replace(&self, path: &str) {
        let mut current = self.current.lock().expect("lock address bar");
        current.set_path(path);
        current.set_query(None);
        current.set_fragment(None);
    }
}

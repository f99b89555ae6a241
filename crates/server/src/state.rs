use service::Store;

/// Router state. Holds the store handle the process was started with;
/// tests build their own around a private database.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self { Self { store } }
}

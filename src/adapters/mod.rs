// Adapters layer: concrete implementations of the domain ports (http catalog, local files).

pub mod http;
pub mod storage;

pub use http::OpenLibraryClient;
pub use storage::LocalStorage;

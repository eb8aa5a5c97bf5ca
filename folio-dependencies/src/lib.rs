pub use axum;
pub use http;
pub use lazy_static;
pub use tower;

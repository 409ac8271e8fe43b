pub mod config {
    pub mod env_loader;
    pub mod model;
}
pub mod error;
pub mod events {
    pub mod dto;
    pub mod filter;
    pub mod model;
    pub mod store;
}
pub mod session {
    pub mod model;
    pub mod queue;
    pub mod store;
}
pub mod tracing;
pub mod web {
    pub mod api;
    pub mod handlers;
    pub mod pages;
    pub mod router;
}

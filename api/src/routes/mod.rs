pub mod announce_route;
pub mod chat;
pub mod classify_route;
pub mod health_route;
pub mod home_route;

//! Concrete model-service clients.

pub mod vertex_service;

// Application layer - Use cases over snapshot sources
pub mod glucose_service;
pub mod snapshot_source;

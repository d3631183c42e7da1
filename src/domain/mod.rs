// Domain layer - Snapshot schema, normalized reading and the normalizer
pub mod normalizer;
pub mod reading;
pub mod snapshot;

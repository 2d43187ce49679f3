pub mod execution;
pub mod lifecycle;
pub mod navigation;
pub mod query;
pub mod sources;

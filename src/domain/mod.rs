pub mod action;
pub mod models;
pub mod registry;
pub mod search;

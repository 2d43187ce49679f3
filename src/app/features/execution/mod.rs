pub mod actions;
pub mod handler;

pub use actions::update;
pub use handler::spawn_invocation;

pub mod helpers;
pub mod page;
pub mod palette;

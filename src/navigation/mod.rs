pub mod loader;
pub mod page;
pub mod table;
pub mod view;

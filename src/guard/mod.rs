pub mod async_guard;
pub mod guard;
pub mod settings;
pub mod sync_guard;
pub mod types;

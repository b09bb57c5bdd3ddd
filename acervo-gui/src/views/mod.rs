pub mod library;
pub mod sidebar;

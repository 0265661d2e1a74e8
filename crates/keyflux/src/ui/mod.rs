pub mod key_manager_view;
pub mod shell;
pub mod theme;
pub mod tokens;

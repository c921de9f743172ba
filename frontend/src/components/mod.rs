pub mod groups;
pub mod templates;
pub mod toast;

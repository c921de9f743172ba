pub mod language;
pub mod link_pool;
pub mod meeting_link;
pub mod session;
pub mod template;
pub mod variable;

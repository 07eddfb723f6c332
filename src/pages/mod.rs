//! Pages

mod tags_page;

pub use tags_page::TagsPage;

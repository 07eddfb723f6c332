//! UI Components

mod new_tag_form;
mod page_header;
mod tag_list;

pub use new_tag_form::NewTagForm;
pub use page_header::{PageFooter, PageHeader};
pub use tag_list::TagList;

pub mod module_page;
pub mod page_header;
pub mod stat_card;

pub mod header;
pub mod history;
pub mod infaq;
pub mod prayers;
pub mod quran;
pub mod statusbar;
pub mod summary;

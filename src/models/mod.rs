pub mod activity;
pub mod book;
pub mod borrower;
pub mod category;

pub mod activity;
pub mod info;
pub mod initialize;
pub mod pool;
pub mod queries;

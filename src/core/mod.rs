pub mod collate;
pub mod diff;
pub mod pipeline;
pub mod session;
pub mod stats;

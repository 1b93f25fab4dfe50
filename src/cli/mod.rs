pub mod classify;
pub mod context;
pub mod search;

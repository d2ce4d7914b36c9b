pub mod open_event;
pub mod query;

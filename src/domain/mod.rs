pub mod bid;
pub mod errors;
pub mod events;
pub mod opportunity;
pub mod supplier;

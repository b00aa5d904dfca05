pub mod energy;
pub mod list;
pub mod types;

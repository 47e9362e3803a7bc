pub mod load;
pub mod registry;
pub mod report;

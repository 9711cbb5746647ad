pub mod dataset;
pub mod edit;
pub mod filters;
pub mod insight;
pub mod records;
pub mod upload;

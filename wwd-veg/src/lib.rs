pub mod dataset;
pub mod error;
pub mod health;
pub mod point;
pub mod record;

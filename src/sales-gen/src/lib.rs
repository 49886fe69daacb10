pub mod batch_builder;
pub mod calendar;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod output;
pub mod probability;
pub mod record;
pub mod schema;

pub mod analyzer;
pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod query;
pub mod shell;

pub mod article;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod crawler;
pub mod error;
pub mod morph;
pub mod pipelines;

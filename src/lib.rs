pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod scan;
pub mod validator;

pub mod formatter;
pub mod handler;
pub mod parser;
pub mod slack;

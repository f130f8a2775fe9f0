mod config;
mod parse;
mod transform;

mod common;
mod config;
mod session;
mod store;

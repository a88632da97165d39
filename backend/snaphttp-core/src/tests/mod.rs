mod config;
mod request;

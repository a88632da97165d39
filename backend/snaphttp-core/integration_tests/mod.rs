mod client;
mod errors;

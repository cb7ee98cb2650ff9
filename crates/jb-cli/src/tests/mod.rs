mod client;
mod upload;

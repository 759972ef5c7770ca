mod channel;
mod config;
mod lifecycle;

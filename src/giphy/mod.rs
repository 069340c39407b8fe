//! Client for the Giphy clip search API
mod client;
mod models;

pub use client::GiphyClient;
pub use models::{ClipImages, GiphyClip, ImageUrl};

pub mod client;

pub use client::CoachClient;

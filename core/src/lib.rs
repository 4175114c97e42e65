pub mod client;

pub use client::RegistryClient;

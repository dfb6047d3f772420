pub mod client;
pub mod expiry_verifier;

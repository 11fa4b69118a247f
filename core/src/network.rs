pub mod resolve;
pub mod tcp;

pub mod demo;
pub mod export;

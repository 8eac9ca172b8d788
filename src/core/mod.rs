pub mod sample;
pub mod services;

pub mod asset;
pub mod controller;
pub mod mood;
pub mod validate;

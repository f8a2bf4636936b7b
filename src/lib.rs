pub mod audit;
pub mod calibrations;
pub mod config;
pub mod consts;
pub mod error;
pub mod events;
pub mod inputs;
pub mod results;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).

pub mod audit;
pub mod calibration;
pub mod records;
pub mod score;

pub mod input;
pub mod market;
pub mod recommend;
pub mod scoring;
pub mod sectors;

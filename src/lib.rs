pub mod error;
pub mod io;
pub mod ranking;
pub mod scheduling;
pub mod scoring;

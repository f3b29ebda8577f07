pub mod cli;
pub mod explorer;
pub mod ports;

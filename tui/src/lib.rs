pub mod cli;
pub mod render;
pub mod terminal;
pub mod trainer;

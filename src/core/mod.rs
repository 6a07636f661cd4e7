pub mod calculator;
pub mod logic;
pub mod scope;
pub mod screen;

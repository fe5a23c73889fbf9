pub mod cst;
pub mod extract;
pub mod generate;
pub mod inputs;
pub mod translate;

pub mod inputs;

pub use inputs::{command, Inputs, InputsBuilder};

//! Discrete user intents delivered by the input driver

use crate::sequence::Viewport;
use crate::sorting::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a new random sequence and abandon any running sort
    Reset,
    /// Start sorting with the selected algorithm and direction
    StartSort,
    SetAscending,
    SetDescending,
    SelectAlgorithm(Algorithm),
    /// The bar region changed size
    Resize(Viewport),
    Quit,
}

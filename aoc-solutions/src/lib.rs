//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution is a unit struct named `DayNN` deriving `AocSolver` and
//! `AutoRegisterSolver`, which adds it to the registry built by
//! `SolverRegistry::discover()` in any binary linking this crate.

pub mod days;

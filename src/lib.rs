//! Join state names onto state populations, compute each state's share of
//! its Census division's population, and write the merged table out.

pub mod agg;
pub mod error;
pub mod join;
pub mod load;
pub mod model;
pub mod ops;
pub mod output;
pub mod report;

//! Match clock

pub mod turn;

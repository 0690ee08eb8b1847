// Terminal presentation of pipeline results.

pub mod terminal;

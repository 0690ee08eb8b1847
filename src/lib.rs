// Rubric: keyword normalization and topic assignment for literature reviews.
//
// This is the library root. Each module corresponds to a stage of the
// assignment pipeline: configuration, cleaning, vector space, similarity,
// assignment, and the tabular boundary around them.

pub mod config;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod table;
pub mod topics;

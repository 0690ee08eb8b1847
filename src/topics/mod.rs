// Topic engine — keyword cleaning, shared vector space, similarity,
// assignment, and canonicalization.

pub mod assign;
pub mod canonical;
pub mod normalize;
pub mod similarity;
pub mod traits;
pub mod vectorize;

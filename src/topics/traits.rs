// Assignment trait — swap-ready abstraction over the two assignment modes.
//
// The pipelines only ever hand cleaned document strings and a label set to an
// assigner and read back one name per document, so the exclusive and nearest
// variants stay interchangeable behind this trait.

use super::assign::TopicLabel;

/// Trait for assigning one topic name (or the sentinel) per document.
pub trait TopicAssigner {
    /// Assign a label name to every document, in input order.
    fn assign(&self, documents: &[String], labels: &[TopicLabel]) -> Vec<String>;
}

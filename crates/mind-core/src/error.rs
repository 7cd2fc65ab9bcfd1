use thiserror::Error;

/// Errors raised while building a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MindError {
    /// Every bit of the condition bitset is already bound to an atom.
    #[error("condition registry is full ({max} conditions), cannot register `{atom}`")]
    ConditionCapacity { max: u32, atom: String },
}

pub mod aggregate;
pub mod sequence;

pub use aggregate::{ComponentType, PatternType, PppoePattern, PppoePatternDto, SequenceItem};
pub use sequence::{
    plan_save, preview, validate_sequence, PatternValidationError, SavePlan, SequenceBuilder,
};

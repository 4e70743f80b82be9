//! Solution cost evaluation.

mod evaluator;

pub use evaluator::CostEvaluator;

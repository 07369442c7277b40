//! Transformations of context-free grammars toward LL(1) parsing:
//! expansion of repetitions, elimination of left recursion, FIRST and
//! FOLLOW sets, LL(1) parse tables, and factoring.

#[cfg(feature = "ll")]
pub use cfg_classify_ll as classify_ll;
#[cfg(feature = "factor")]
pub use cfg_factor as factor;
pub use cfg_grammar::*;
#[cfg(feature = "left-recursion")]
pub use cfg_left_recursion as left_recursion;
#[cfg(feature = "load")]
pub use cfg_load as load;
#[cfg(feature = "predict-sets")]
pub use cfg_predict_sets as predict_sets;
#[cfg(feature = "sequence")]
pub use cfg_sequence as sequence;
pub use cfg_symbol::*;

#[cfg(all(feature = "sequence", feature = "left-recursion", feature = "factor"))]
pub mod pipeline;

#[cfg(all(feature = "sequence", feature = "left-recursion", feature = "factor"))]
pub use crate::pipeline::{Pass, Pipeline, PipelineError};

//! Predict sets: FIRST and FOLLOW set computation.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod cfg_sets_ext;
pub mod first;
pub mod follow;

pub use self::cfg_sets_ext::CfgSetsExt;
pub use self::first::{FirstSet, FirstSets};
pub use self::follow::{stringify_lookahead, FollowSet, FollowSets, Lookahead};

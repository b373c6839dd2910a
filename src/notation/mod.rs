//! Notation layer: classify raw command arguments and flatten them into
//! attribute units.
//!
//! Accepted call shapes:
//! - astr+val:  ["marker.size", 7]            or ["marker.size", [7, 5], [1, 0]]
//! - aobj:      [{"marker.size": 7}]          or [{"marker.size": [7, 5]}, [1, 0]]
//! - mixed:     [{"line.color": "red", "line": {"width": [2, 8]}}]
//!
//! Anything else is malformed and yields no units.

pub mod kind;
pub mod normalize;
pub mod unit;

pub use kind::NotationKind;
pub use normalize::normalize;
pub use unit::{AttrValue, AttributeUnit};

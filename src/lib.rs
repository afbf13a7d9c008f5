//! Conversion of non-negative integers between positional numeral systems.
//!
//! Only the decimal -> binary direction exists for now. The permitted input
//! and output systems are exposed as separate sets on purpose - extending to
//! another pair is widening a set plus implementing the actual algorithm, and
//! the pair check stays a distinct error so a widened set alone doesn't
//! silently enable an unimplemented combination.
//!
//! There is no limit on input length and values don't have to fit any machine
//! integer - the accumulator is a `BigUint`. A caller who cares about resource
//! usage should bound the input length before calling.

mod conv;

pub use conv::{convert, permitted_input_systems, permitted_output_systems, ConvError};

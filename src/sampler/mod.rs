//! Grid scan of the policy space against every party's indifference disk.

mod key;
mod sampler;

pub use key::CoalitionKey;
pub use sampler::{GridPoint, OverlapSampler, Sample};

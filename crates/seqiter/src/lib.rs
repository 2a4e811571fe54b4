#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/pipeline.rs")]
#![doc = "```"]

mod error;
mod iterator;
mod iterators;
mod state;
mod terminal;

pub use error::*;
pub use iterator::*;
pub use iterators::*;
pub use state::*;
pub use terminal::*;

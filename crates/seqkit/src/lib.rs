#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/toolkit.rs")]
#![doc = "```"]

pub use seqiter::{self, BoxedSeqIterator, Error as IterError, SeqIterator, State};

pub mod error;
pub mod maps;
pub mod pointer;
pub mod slice;

pub use error::*;

pub mod partitioner;

pub use partitioner::*;

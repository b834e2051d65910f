//! Decoding pipeline: line classification, key/value splitting, the array
//! tokenizer, and the value/table assembly that ties them together.

pub mod assemble;
pub mod machine;
pub mod parser;
pub mod scanner;
pub mod splitter;
pub mod state;

// Text processing: raw page text -> tokens -> word counts.

pub mod frequency;
pub mod tokenizer;

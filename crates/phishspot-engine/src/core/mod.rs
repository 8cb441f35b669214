pub mod clock;
pub mod tokenizer;

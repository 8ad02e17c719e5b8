pub mod summarizer;

pub use summarizer::Summarizer;

pub mod ollama;
pub mod probe;

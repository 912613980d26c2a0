pub mod ollama;
pub mod structs;

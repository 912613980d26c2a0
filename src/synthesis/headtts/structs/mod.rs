pub mod audio_encoding;
pub mod synthesize_request;

//! Gemini text-extraction client.
//!
//! One parametrized client covers both media kinds: the image and audio
//! paths differ only in the upstream model name and the declared MIME type,
//! so they share a single request/response pipeline keyed by [`MediaKind`].

mod api;

pub use api::{GeminiClient, MediaKind};

mod inference_client;

pub use inference_client::{ChatOptions, InferenceClient, InferenceError};

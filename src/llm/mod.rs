mod generation_client;
mod mock;
mod openai;

pub use generation_client::GenerationClient;
pub use mock::MockGenerationClient;
pub use openai::OpenAiGenerationClient;

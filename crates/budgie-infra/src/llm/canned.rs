//! Offline provider with canned narratives.
//!
//! Serves demos and `narrate --offline` without network access or a
//! credential. Picks a response by sniffing the prompt for the scenario's
//! persona wording.

use budgie_core::llm::provider::LlmProvider;
use budgie_types::llm::{CompletionRequest, CompletionResponse, LlmError};

const MOVIE_RESPONSE: &str = "\"WIRED FOR DISASTER\": Your $100M blockbuster features A-list celebrities performing in cardboard sets with Windows Movie Maker-level effects. Critics will praise the acting while wondering if the explosions were drawn with crayons. At least the soundtrack slaps!";

const WEDDING_RESPONSE: &str = "\"OWAMBE GRANDEUR, BUDGET REALITY\": Your ₦30M Nigerian wedding features Jollof that would make Aunties weep with joy, served in a hastily-decorated hall with plastic chairs. The photographer is world-class, but the DJ only knows five songs including \"Decale Gwada\" on repeat!";

const STARTUP_RESPONSE: &str = "\"Revolutionary Ideas, Evolutionary Funding\": Your startup has an amazing product with zero marketing—enjoy your 12 very enthusiastic users! Your developers are coding on laptops from 2010 in a fancy WeWork while legal issues pile up unaddressed. Prepare for acquisition... of your office furniture when you shut down.";

const GENERIC_RESPONSE: &str = "Something went wrong with the simulation. Please try again!";

/// Provider returning fixed narratives without any network call.
#[derive(Debug, Default)]
pub struct CannedProvider;

impl CannedProvider {
    pub fn new() -> Self {
        Self
    }

    fn pick(prompt: &str) -> &'static str {
        if prompt.contains("movie budget") {
            MOVIE_RESPONSE
        } else if prompt.contains("Nigerian wedding") {
            WEDDING_RESPONSE
        } else if prompt.contains("startup") {
            STARTUP_RESPONSE
        } else {
            GENERIC_RESPONSE
        }
    }
}

impl LlmProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let prompt = request
            .messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: Self::pick(prompt).to_string(),
            model: "canned".to_string(),
        })
    }
}

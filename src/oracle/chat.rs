use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::{debug, instrument};

use super::config::OracleConfig;
use super::error::OracleError;
use super::parse::parse_reply;
use super::prompt::{system_prompt, user_prompt};
use super::types::{OracleRequest, OracleVerdict};
use super::RephrasingOracle;

/// Oracle backed by a chat-completion provider through `genai`.
///
/// The tier of each request selects the model (`OracleConfig::model_for`)
/// and the sampling settings (`Tier::temperature`, `Tier::max_tokens`).
/// Provider credentials are resolved by `genai` from the environment
/// (e.g. `OPENAI_API_KEY`).
#[derive(Clone)]
pub struct GenaiOracle {
    client: Client,
    config: OracleConfig,
}

impl GenaiOracle {
    pub fn new(config: OracleConfig) -> Self {
        Self::with_client(Client::default(), config)
    }

    pub fn with_client(client: Client, config: OracleConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl std::fmt::Debug for GenaiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiOracle")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RephrasingOracle for GenaiOracle {
    #[instrument(skip(self, request), fields(tier = %request.tier))]
    async fn ask(&self, request: &OracleRequest) -> Result<OracleVerdict, OracleError> {
        let model = self.config.model_for(request.tier).to_string();

        let chat_req = ChatRequest::new(vec![
            ChatMessage::system(system_prompt(request.tier)),
            ChatMessage::user(user_prompt(request)),
        ]);
        let options = ChatOptions::default()
            .with_temperature(request.tier.temperature())
            .with_max_tokens(request.tier.max_tokens());

        let resp = self
            .client
            .exec_chat(&model, chat_req, Some(&options))
            .await
            .map_err(|e| OracleError::Provider {
                model: model.clone(),
                reason: e.to_string(),
            })?;

        let content = resp
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| OracleError::EmptyResponse {
                model: model.clone(),
            })?;

        let parsed = parse_reply(content);

        debug!(
            model = %model,
            decision = parsed.decision.wire_name(),
            confidence = parsed.confidence,
            "Oracle replied"
        );

        Ok(OracleVerdict {
            decision: parsed.decision,
            confidence: parsed.confidence,
            reasoning: parsed.reasoning,
            model,
        })
    }
}

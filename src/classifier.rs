use crate::{
    ai::{AiError, KeyRing},
    domain::{ClassificationRequest, ClassificationResult},
    keywords::{scan, KeywordCorpus},
};

/// Seam between the retry loop and the remote provider so the loop can be
/// exercised against a scripted backend.
#[allow(async_fn_in_trait)]
pub trait AiBackend {
    async fn classify(
        &self,
        api_key: &str,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, AiError>;
}

pub struct Classifier<B> {
    backend: B,
    keys: KeyRing,
    corpus: KeywordCorpus,
}

impl<B: AiBackend> Classifier<B> {
    pub fn new(backend: B, keys: KeyRing, corpus: KeywordCorpus) -> Self {
        Self {
            backend,
            keys,
            corpus,
        }
    }

    /// Total classification: the AI path first, the local keyword scan when
    /// the AI path is exhausted or aborted. Callers see the same result
    /// shape either way; degradation is only visible in the logs.
    pub async fn classify(&self, request: &ClassificationRequest) -> ClassificationResult {
        if let Some(result) = self.try_ai(request).await {
            return result;
        }
        tracing::info!(
            target: "classifier",
            "AI path failed or exhausted; running local keyword scan"
        );
        scan(&request.text, &self.corpus)
    }

    /// One attempt per credential. A rate-limited key rotates to the next;
    /// any other failure aborts immediately, since another key's quota does
    /// not fix a broken network or a malformed payload.
    async fn try_ai(&self, request: &ClassificationRequest) -> Option<ClassificationResult> {
        for attempt in 0..self.keys.len() {
            let api_key = self.keys.current();
            match self.backend.classify(&api_key, request).await {
                Ok(result) => return Some(result),
                Err(err) if err.is_rate_limited() => {
                    let next_key_index = self.keys.rotate();
                    tracing::warn!(
                        target: "ai",
                        attempt,
                        next_key_index,
                        error = %err,
                        "credential rate-limited; rotating"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        target: "ai",
                        attempt,
                        error = %err,
                        "backend error; aborting AI attempts"
                    );
                    return None;
                }
            }
        }
        None
    }
}

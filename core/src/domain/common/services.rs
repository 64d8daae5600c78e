use crate::domain::{
    chat::ports::LLMClient,
    history::ports::HistoryRepository,
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::ports::ProfileRepository,
    risk::ports::NutritionLookup,
    session::ports::SessionStore,
};

/// Aggregates every outbound port. Domain service traits are implemented on
/// this struct in each domain's `services` module.
#[derive(Clone)]
pub struct Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    pub(crate) ocr_provider: O,
    pub(crate) local_ocr: L,
    pub(crate) nutrition_lookup: N,
    pub(crate) llm_client: LLM,
    pub(crate) history_repository: H,
    pub(crate) profile_repository: P,
    pub(crate) session_store: S,
}

impl<O, L, N, LLM, H, P, S> Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ocr_provider: O,
        local_ocr: L,
        nutrition_lookup: N,
        llm_client: LLM,
        history_repository: H,
        profile_repository: P,
        session_store: S,
    ) -> Self {
        Self {
            ocr_provider,
            local_ocr,
            nutrition_lookup,
            llm_client,
            history_repository,
            profile_repository,
            session_store,
        }
    }
}

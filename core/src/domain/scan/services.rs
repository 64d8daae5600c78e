use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, human_readable_now, services::Service},
    history::{entities::HistoryEntry, ports::HistoryRepository, services::record_history},
    ingredient::services::{extract_ingredients, strip_label, summarize},
    ocr::{
        entities::OcrProgressSink,
        ports::{LocalOcrEngine, RemoteOcrProvider},
        services::resolve_text,
    },
    profile::{entities::UserProfile, ports::ProfileRepository},
    risk::{ports::NutritionLookup, services::classify_ingredients},
    scan::{
        entities::{IngredientCard, ScanReport},
        ports::ScanService,
    },
    session::{entities::ScanStep, ports::SessionStore, services::load_session},
};

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
    async fn set_step(&self, session_id: Uuid, step: ScanStep) -> Result<(), CoreError> {
        let mut session = load_session(&self.session_store, session_id).await?;
        session.step = step;
        session.touch();
        self.session_store.update(session).await
    }
}

impl<O, L, N, LLM, H, P, S> ScanService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    #[instrument(skip(self, progress))]
    async fn scan(
        &self,
        session_id: Uuid,
        progress: OcrProgressSink,
    ) -> Result<ScanReport, CoreError> {
        // 1. Session must hold an image
        let session = load_session(&self.session_store, session_id).await?;
        let image = session.image.clone().ok_or(CoreError::Invalid)?;

        let profile = UserProfile::from(self.profile_repository.fetch().await?);
        let banner = profile.scan_banner();
        tracing::info!("{}", banner);

        self.set_step(session_id, ScanStep::Scanning).await?;

        // 2. Text, with the single fallback
        let resolved =
            match resolve_text(&self.ocr_provider, &self.local_ocr, &image, progress).await {
                Ok(resolved) => resolved,
                Err(e) => {
                    self.set_step(session_id, ScanStep::ImageSelected).await?;
                    return Err(e);
                }
            };

        // 3. Ingredients and their tiers
        let extracted_text = strip_label(&resolved.text);
        let ingredients = extract_ingredients(&resolved.text);
        let results = classify_ingredients(&self.nutrition_lookup, &ingredients).await;

        // 4. Store in session, re-read so chat messages sent meanwhile survive
        let mut session = load_session(&self.session_store, session_id).await?;
        session.raw_text = Some(extracted_text.clone());
        session.ingredients = ingredients.clone();
        session.results = results.clone();
        session.step = ScanStep::ResultsReady;
        session.touch();
        self.session_store.update(session).await?;

        // 5. History
        let history = record_history(
            &self.history_repository,
            HistoryEntry::new(
                image.data_url.clone(),
                summarize(&ingredients),
                human_readable_now(),
            ),
        )
        .await?;

        tracing::info!(
            provider = ?resolved.provider,
            ingredients = ingredients.len(),
            "Scan completed"
        );

        Ok(ScanReport {
            session_id,
            banner,
            provider: resolved.provider,
            extracted_text,
            ingredients,
            cards: results.iter().map(IngredientCard::from).collect(),
            history: history.into_entries(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bytes::Bytes;

    use super::*;
    use crate::{
        domain::{
            chat::entities::LLMReply,
            history::{entities::ScanHistory, ports::HistoryService},
            image::entities::{ImagePayload, ImageSource},
            ingredient::entities::Ingredient,
            ocr::entities::OcrProvider,
            profile::entities::ProfileRecord,
            risk::entities::{ProductFacts, RiskTier},
            session::{
                entities::ScanSession,
                ports::{AttachImageInput, SessionService},
            },
        },
        infrastructure::session::InMemorySessionStore,
    };

    struct Primary(Option<&'static str>);

    impl RemoteOcrProvider for Primary {
        async fn recognize(&self, _image: &ImagePayload) -> Result<String, CoreError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| CoreError::ExternalServiceError("quota exceeded".into()))
        }
    }

    struct Fallback(Option<&'static str>);

    impl LocalOcrEngine for Fallback {
        async fn recognize(
            &self,
            _image: &ImagePayload,
            _progress: OcrProgressSink,
        ) -> Result<String, CoreError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| CoreError::ExternalServiceError("tesseract missing".into()))
        }
    }

    struct Lookup;

    impl NutritionLookup for Lookup {
        async fn lookup(&self, ingredient: &Ingredient) -> Result<Option<ProductFacts>, CoreError> {
            let grade = match ingredient.as_str() {
                "Oats" => "a",
                "Sugar" => "e",
                _ => return Ok(None),
            };
            Ok(Some(ProductFacts {
                nutriscore_grade: Some(grade.into()),
                ..Default::default()
            }))
        }
    }

    struct Silent;

    impl LLMClient for Silent {
        async fn generate_text(&self, _prompt: String) -> Result<LLMReply, CoreError> {
            Ok(LLMReply::Empty)
        }
    }

    #[derive(Default)]
    struct History(Mutex<ScanHistory>);

    impl HistoryRepository for History {
        async fn load(&self) -> Result<ScanHistory, CoreError> {
            Ok(self.0.lock().unwrap().clone())
        }

        async fn save(&self, history: ScanHistory) -> Result<(), CoreError> {
            *self.0.lock().unwrap() = history;
            Ok(())
        }

        async fn clear(&self) -> Result<(), CoreError> {
            *self.0.lock().unwrap() = ScanHistory::default();
            Ok(())
        }
    }

    struct Profile;

    impl ProfileRepository for Profile {
        async fn fetch(&self) -> Result<ProfileRecord, CoreError> {
            Ok(ProfileRecord {
                display_name: Some("Sam".into()),
                ..Default::default()
            })
        }

        async fn store(&self, _record: ProfileRecord) -> Result<(), CoreError> {
            Ok(())
        }

        async fn clear(&self) -> Result<(), CoreError> {
            Ok(())
        }
    }

    type TestService =
        Service<Primary, Fallback, Lookup, Silent, History, Profile, InMemorySessionStore>;

    fn service(primary: Option<&'static str>, fallback: Option<&'static str>) -> TestService {
        Service::new(
            Primary(primary),
            Fallback(fallback),
            Lookup,
            Silent,
            History::default(),
            Profile,
            InMemorySessionStore::new(),
        )
    }

    async fn session_with_image(service: &TestService) -> Uuid {
        let session = service.create_session().await.unwrap();
        service
            .attach_image(AttachImageInput {
                session_id: session.id,
                bytes: Bytes::from_static(b"\xff\xd8\xff"),
                mime_type: Some("image/jpeg".into()),
                source: ImageSource::Capture,
            })
            .await
            .unwrap();
        session.id
    }

    #[tokio::test]
    async fn test_scan_runs_whole_pipeline() {
        let service = service(Some("Ingredients: Oats, Sugar, Water.\n"), None);
        let session_id = session_with_image(&service).await;

        let report = service
            .scan(session_id, OcrProgressSink::noop())
            .await
            .unwrap();

        assert_eq!(report.provider, OcrProvider::Primary);
        assert_eq!(
            report.banner,
            "Sam, analyzing ingredients for your health condition: general health"
        );
        let tiers: Vec<_> = report.cards.iter().map(|c| c.tier).collect();
        assert_eq!(tiers, vec![RiskTier::Good, RiskTier::Bad, RiskTier::Moderate]);
        assert_eq!(report.cards[1].note, "High sugar can worsen diabetes and increase obesity risk.");
        assert_eq!(report.history.len(), 1);
        assert_eq!(report.history[0].summary, "Oats, Sugar, Water");

        let snapshot = service.get_session(session_id).await.unwrap();
        assert_eq!(snapshot.step, ScanStep::ResultsReady);
        assert_eq!(snapshot.results.len(), 3);
    }

    #[tokio::test]
    async fn test_scan_uses_fallback_when_primary_fails() {
        let service = service(None, Some("Sugar"));
        let session_id = session_with_image(&service).await;

        let report = service
            .scan(session_id, OcrProgressSink::noop())
            .await
            .unwrap();

        assert_eq!(report.provider, OcrProvider::Fallback);
        assert_eq!(report.ingredients, vec![Ingredient::parse("Sugar").unwrap()]);
    }

    #[tokio::test]
    async fn test_scan_failure_on_both_providers_aborts() {
        let service = service(None, None);
        let session_id = session_with_image(&service).await;

        let result = service.scan(session_id, OcrProgressSink::noop()).await;
        assert_eq!(result, Err(CoreError::OcrFailed));

        let snapshot = service.get_session(session_id).await.unwrap();
        assert_eq!(snapshot.step, ScanStep::ImageSelected);
        assert!(snapshot.results.is_empty());
        assert!(service.get_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_without_image_is_invalid() {
        let service = service(Some("Sugar"), None);
        let session = ScanSession::new();
        let session_id = session.id;
        service.session_store.insert(session).await.unwrap();

        let result = service.scan(session_id, OcrProgressSink::noop()).await;
        assert_eq!(result, Err(CoreError::Invalid));
    }

    #[tokio::test]
    async fn test_scan_unknown_session() {
        let service = service(Some("Sugar"), None);
        let result = service.scan(Uuid::new_v4(), OcrProgressSink::noop()).await;
        assert_eq!(result, Err(CoreError::NotFound));
    }
}

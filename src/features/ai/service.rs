use std::sync::Arc;

use tokio::sync::Mutex;

use super::{AiConfig, DocumentStore, UpdateParametersReq, UpdatePromptReq};
use crate::utils::error::Result;

/// Owns the singleton AI configuration document. Every read-modify-write
/// cycle runs under `write_lock`, so concurrent updates through one service
/// are serialized per document; there is no cross-process lock.
#[derive(Clone)]
pub struct AiConfigService {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AiConfigService {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get(&self) -> Result<AiConfig> {
        let _guard = self.write_lock.lock().await;
        self.load_or_init()
    }

    pub async fn update_prompt(&self, req: &UpdatePromptReq) -> Result<AiConfig> {
        let prompt = req.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut cfg = self.load_or_init()?;
        cfg.prompt = prompt;
        self.store.save(&cfg)?;
        Ok(cfg)
    }

    pub async fn update_parameters(&self, req: &UpdateParametersReq) -> Result<AiConfig> {
        let (temperature, max_tokens) = req.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut cfg = self.load_or_init()?;
        cfg.temperature = temperature;
        cfg.max_tokens = max_tokens;
        self.store.save(&cfg)?;
        Ok(cfg)
    }

    /// Absent document ⇒ persist and return the default record. A document
    /// that exists but fails to decode propagates as `Corrupt`.
    fn load_or_init(&self) -> Result<AiConfig> {
        match self.store.load()? {
            Some(cfg) => Ok(cfg),
            None => {
                let cfg = AiConfig::default();
                self.store.save(&cfg)?;
                Ok(cfg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ai::{JsonFileStore, DEFAULT_PROMPT};
    use crate::utils::error::Error;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> AiConfigService {
        AiConfigService::new(JsonFileStore::new(dir.path().join("ai_config.json")))
    }

    fn prompt_req(prompt: &str) -> UpdatePromptReq {
        UpdatePromptReq {
            prompt: Some(prompt.into()),
        }
    }

    fn params_req(temperature: f64, max_tokens: i64) -> UpdateParametersReq {
        UpdateParametersReq {
            temperature: Some(temperature),
            max_tokens: Some(max_tokens),
        }
    }

    #[tokio::test]
    async fn get_on_fresh_store_materializes_the_default() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let cfg = svc.get().await.unwrap();
        assert_eq!(cfg.prompt, DEFAULT_PROMPT);
        assert_eq!(cfg.temperature, 0.7);
        assert_eq!(cfg.max_tokens, 150);

        // the document now exists with exactly those values
        let on_disk = JsonFileStore::new(dir.path().join("ai_config.json"))
            .load()
            .unwrap();
        assert_eq!(on_disk, Some(cfg));
    }

    #[tokio::test]
    async fn update_prompt_leaves_parameters_untouched() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let cfg = svc.update_prompt(&prompt_req("Hello")).await.unwrap();
        assert_eq!(cfg.prompt, "Hello");
        assert_eq!(cfg.temperature, 0.7);
        assert_eq!(cfg.max_tokens, 150);
        assert_eq!(svc.get().await.unwrap().prompt, "Hello");
    }

    #[tokio::test]
    async fn update_parameters_leaves_prompt_untouched() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        svc.update_prompt(&prompt_req("Hi there")).await.unwrap();
        let cfg = svc.update_parameters(&params_req(0.9, 300)).await.unwrap();
        assert_eq!(cfg.prompt, "Hi there");
        assert_eq!(cfg.temperature, 0.9);
        assert_eq!(cfg.max_tokens, 300);
    }

    #[tokio::test]
    async fn rejected_update_keeps_the_committed_record() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        svc.update_parameters(&params_req(0.9, 300)).await.unwrap();

        let err = svc
            .update_parameters(&params_req(2.0, 300))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let cfg = svc.get().await.unwrap();
        assert_eq!(cfg.temperature, 0.9);
        assert_eq!(cfg.max_tokens, 300);
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_without_a_write() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let err = svc.update_prompt(&prompt_req("   ")).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // the rejected update did not materialize anything
        let on_disk = JsonFileStore::new(dir.path().join("ai_config.json"))
            .load()
            .unwrap();
        assert_eq!(on_disk, None);
    }

    #[tokio::test]
    async fn get_surfaces_corruption_instead_of_healing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ai_config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let svc = AiConfigService::new(JsonFileStore::new(path.clone()));
        assert!(matches!(svc.get().await, Err(Error::Corrupt(_))));

        // the customized-but-broken document is left for the operator
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn sequential_updates_reflect_the_last_successful_write_per_field() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        assert_eq!(svc.get().await.unwrap().max_tokens, 150);

        let cfg = svc.update_prompt(&prompt_req("Hi there")).await.unwrap();
        assert_eq!(cfg.prompt, "Hi there");
        assert_eq!(cfg.max_tokens, 150);

        let cfg = svc.update_parameters(&params_req(0.9, 300)).await.unwrap();
        assert_eq!(
            cfg,
            AiConfig {
                prompt: "Hi there".into(),
                temperature: 0.9,
                max_tokens: 300,
            }
        );

        assert!(svc.update_parameters(&params_req(2.0, 300)).await.is_err());
        let cfg = svc.get().await.unwrap();
        assert_eq!((cfg.temperature, cfg.max_tokens), (0.9, 300));
    }
}

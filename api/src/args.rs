use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use labelguard_core::{
    domain::common::{
        FallbackOcrConfig, LLMConfig, LabelGuardConfig, NutritionConfig, OcrConfig,
        SessionConfig, StorageConfig,
    },
    infrastructure::{
        llm::gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
        nutrition::open_food_facts::DEFAULT_OPEN_FOOD_FACTS_URL,
        ocr::{ocr_space::DEFAULT_OCR_SPACE_ENDPOINT, tesseract::DEFAULT_TESSERACT_BINARY},
        session::memory::DEFAULT_MAX_SESSIONS,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelguard-api", version, about = "Food label scanner API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub nutrition: NutritionArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(long = "ocr-api-key", env = "OCR_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long = "ocr-endpoint", env = "OCR_ENDPOINT", default_value = DEFAULT_OCR_SPACE_ENDPOINT)]
    pub endpoint: String,

    #[arg(long = "tesseract-path", env = "TESSERACT_PATH", default_value = DEFAULT_TESSERACT_BINARY)]
    pub tesseract_path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct NutritionArgs {
    #[arg(
        long = "nutrition-base-url",
        env = "NUTRITION_BASE_URL",
        default_value = DEFAULT_OPEN_FOOD_FACTS_URL
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    #[arg(long = "max-sessions", env = "MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
    pub max_sessions: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LabelGuardConfig {
    fn from(args: Args) -> Self {
        LabelGuardConfig {
            ocr: OcrConfig {
                api_key: args.ocr.api_key,
                endpoint: args.ocr.endpoint,
            },
            fallback_ocr: FallbackOcrConfig {
                tesseract_path: args.ocr.tesseract_path,
            },
            nutrition: NutritionConfig {
                base_url: args.nutrition.base_url,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                base_url: args.llm.gemini_base_url,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
            session: SessionConfig {
                max_sessions: args.session.max_sessions,
            },
        }
    }
}

use brainstorm_bakery::QuizController;
use brainstorm_bakery::config::GameConfig;
use brainstorm_bakery::data::load_categories;
use brainstorm_bakery::generation::{GeminiClient, GenerationContext, QuestionSource, RetryPolicy};
use brainstorm_bakery::score::ScoreStore;
use brainstorm_bakery::ui::{WINDOW_TITLE, native_options};
use brainstorm_bakery::view_models::ScreenModel;
use std::time::Instant;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    // Sin clave no hay preguntas: se avisa y se sale antes de abrir la ventana
    let api_key = match config.require_api_key() {
        Ok(key) => key,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(&config.api_base, api_key, config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Could not build the HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let categories = load_categories(&config.categories_file);
    log::info!("Using model {} with {} categories", config.model, categories.len());

    let source = QuestionSource::new(
        GenerationContext {
            generator: Box::new(client),
            model: config.model.clone(),
            categories,
        },
        RetryPolicy {
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay(),
        },
    );
    let scores = ScoreStore::new(&config.score_file);

    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| {
            Ok(Box::new(QuizController::new(
                ScreenModel::default(),
                source,
                scores,
                Instant::now(),
            )))
        }),
    )
}

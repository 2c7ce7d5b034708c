//! Generation command handlers.

use super::commands::{LanguageArg, LessonSource, OutputFormat};
use super::library::repository;
use super::render::{print_adapted, print_bundle, print_deck};
use pathshala::{
    AdaptationPipeline, AdaptationRequest, GeminiClient, JsonError, JsonErrorKind,
    LessonContentBundle, LessonPipeline, LessonRepository, LessonRequestBuilder,
    PathshalaConfig, PathshalaResult, QuestionPaperKind, QuestionPaperPipeline,
    QuestionPaperRequest, SlidePipeline, SlideRequest, StorageError, StorageErrorKind,
    TeachingMethod, ValidationError, ValidationErrorKind, search_from_config,
};
use std::path::Path;
use tracing::info;

/// Gemini driver with the configured web-search capability installed.
fn driver(config: &PathshalaConfig) -> PathshalaResult<GeminiClient> {
    let client = GeminiClient::new(config.model())?;
    Ok(match search_from_config(config.search())? {
        Some(search) => client.with_web_search(search),
        None => client,
    })
}

async fn save(
    config: &PathshalaConfig,
    topic: &str,
    bundle: &LessonContentBundle,
) -> PathshalaResult<()> {
    let record = repository(config)?.insert(topic, bundle.clone()).await?;
    info!(id = %record.id(), "Saved lesson to library");
    eprintln!("Saved as {}", record.id());
    Ok(())
}

/// Generate a lesson.
#[tracing::instrument(skip(config, methods))]
pub async fn handle_lesson(
    config: &PathshalaConfig,
    topic: String,
    grade: String,
    methods: Vec<TeachingMethod>,
    save_lesson: bool,
    format: OutputFormat,
) -> PathshalaResult<()> {
    let request = LessonRequestBuilder::default()
        .topic(topic)
        .grade_level(grade)
        .teaching_methods(methods)
        .build()?;

    let pipeline = LessonPipeline::new(driver(config)?);
    let bundle = pipeline.run(&request).await?;

    if save_lesson {
        save(config, request.topic(), &bundle).await?;
    }
    print_bundle(&bundle, format)
}

/// Generate a standalone question paper.
#[tracing::instrument(skip(config))]
pub async fn handle_question_paper(
    config: &PathshalaConfig,
    subject: String,
    kind: QuestionPaperKind,
    save_paper: bool,
    format: OutputFormat,
) -> PathshalaResult<()> {
    let request = QuestionPaperRequest::new(subject, kind);
    // Reject a blank subject before a driver is built.
    request.to_lesson_request()?;

    let pipeline = QuestionPaperPipeline::new(driver(config)?);
    let bundle = pipeline.run(&request).await?;

    if save_paper {
        save(config, &request.topic(), &bundle).await?;
    }
    print_bundle(&bundle, format)
}

async fn load_bundle_file(path: &Path) -> PathshalaResult<LessonContentBundle> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    Ok(serde_json::from_str(&text)
        .map_err(|e| {
            JsonError::new(JsonErrorKind::BundleFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?)
}

/// Turn a saved lesson or a bundle file into slides.
#[tracing::instrument(skip(config, source))]
pub async fn handle_slides(
    config: &PathshalaConfig,
    source: LessonSource,
    topic: Option<String>,
    grade: String,
    language: LanguageArg,
    format: OutputFormat,
) -> PathshalaResult<()> {
    let (saved_topic, bundle) = match (source.id, source.file) {
        (Some(id), _) => {
            let record = repository(config)?.get(&id).await?;
            (Some(record.topic().clone()), record.lesson_content().clone())
        }
        (None, Some(file)) => (None, load_bundle_file(&file).await?),
        (None, None) => {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "id or file".to_string(),
            ))
            .into());
        }
    };

    let topic = topic.or(saved_topic).ok_or_else(|| {
        ValidationError::new(ValidationErrorKind::MissingField("topic".to_string()))
    })?;

    let request = SlideRequest::from_bundle(topic, grade, &bundle, language.into());
    let pipeline = SlidePipeline::new(driver(config)?);
    let deck = pipeline.run(&request).await?;
    print_deck(&deck, format)
}

/// Adapt a saved lesson to new teaching methods.
#[tracing::instrument(skip(config, methods))]
pub async fn handle_adapt(
    config: &PathshalaConfig,
    id: String,
    grade: String,
    methods: Vec<TeachingMethod>,
    format: OutputFormat,
) -> PathshalaResult<()> {
    let record = repository(config)?.get(&id).await?;
    let request = LessonRequestBuilder::default()
        .topic(record.topic().clone())
        .grade_level(grade)
        .teaching_methods(methods)
        .build()?;

    let pipeline = AdaptationPipeline::new(driver(config)?);
    let adapted = pipeline
        .run(&AdaptationRequest::from_bundle(request, record.lesson_content()))
        .await?;
    print_adapted(&adapted, format)
}

//! Generate, save, reload and slide a lesson through the facade.

use async_trait::async_trait;
use pathshala::{
    GenerateRequest, GenerateResponse, GenerationDriver, JsonFileLessonRepository, Language,
    LessonPipeline, LessonRepository, Output, PathshalaResult, SlidePipeline, SlideRequest,
    validate_request,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Answers lesson requests with a bundle and slide requests with a deck.
#[derive(Debug, Default)]
struct StubDriver {
    calls: AtomicUsize,
}

#[async_trait]
impl GenerationDriver for StubDriver {
    async fn generate(&self, req: &GenerateRequest) -> PathshalaResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let is_slides = req
            .response_schema()
            .as_ref()
            .is_some_and(|s| s["properties"].get("slides").is_some());

        let value = if is_slides {
            let slides: Vec<_> = ["Photosynthesis", "Light", "Water", "Air", "Sugar", "Review"]
                .iter()
                .map(|t| json!({"title": t, "content": format!("- {}", t), "speakerNotes": ""}))
                .collect();
            json!({ "slides": slides })
        } else {
            json!({
                "englishContent": "A leaf is a kitchen that cooks with sunlight.",
                "kannadaContent": "ಎಲೆ ಸೂರ್ಯನ ಬೆಳಕಿನಿಂದ ಅಡುಗೆ ಮಾಡುವ ಅಡುಗೆಮನೆ.",
                "urduContent": "پتہ ایک باورچی خانہ ہے جو دھوپ سے پکاتا ہے۔",
                "questionPaperEnglish": "",
                "questionPaperKannada": "",
                "questionPaperUrdu": "",
                "answerKeyEnglish": "",
                "answerKeyKannada": "",
                "answerKeyUrdu": ""
            })
        };
        Ok(GenerateResponse::new(Output::Json(value), 0))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

#[tokio::test]
async fn saved_lesson_becomes_slides() -> anyhow::Result<()> {
    let request = validate_request(&json!({
        "topic": "Photosynthesis",
        "gradeLevel": "Grade 6",
        "teachingMethods": ["Analogy"]
    }))?;
    let bundle = LessonPipeline::new(StubDriver::default())
        .run(&request)
        .await?;

    let temp_dir = TempDir::new()?;
    let repo = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;
    let saved = repo.insert(request.topic(), bundle).await?;

    let reloaded = repo.get(saved.id()).await?;
    let slide_request = SlideRequest::from_bundle(
        reloaded.topic().clone(),
        request.grade_level().clone(),
        reloaded.lesson_content(),
        Language::English,
    );
    assert!(slide_request.lesson_content().contains("kitchen"));

    let driver = StubDriver::default();
    let pipeline = SlidePipeline::new(driver);
    let deck = pipeline.run(&slide_request).await?;
    assert_eq!(deck.len(), 6);
    assert_eq!(deck.slides()[0].title(), "Photosynthesis");

    repo.delete(saved.id()).await?;
    assert!(repo.list().await?.is_empty());
    Ok(())
}

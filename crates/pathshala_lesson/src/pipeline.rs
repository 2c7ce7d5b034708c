//! Single-shot generation cycles.
//!
//! Every pipeline follows the same shape: validate the input, assemble the
//! instruction, make exactly one generation call, validate the answer. There
//! is no retry, repair or re-prompt; a failure at any step is returned as is.

use crate::prompt::{
    AssembledPrompt, assemble_adaptation_prompt, assemble_lesson_prompt,
    assemble_question_paper_prompt, assemble_slide_prompt,
};
use crate::request_validator::validate_request;
use crate::response_validator::{validate_adapted, validate_bundle, validate_slides};
use pathshala_core::{
    AdaptationRequest, AdaptedContent, GenerateRequestBuilder, LessonContentBundle,
    LessonRequest, Output, QuestionPaperRequest, SlideDeck, SlideRequest,
};
use pathshala_error::{
    BuilderError, BuilderErrorKind, PathshalaResult, ValidationError, ValidationErrorKind,
};
use pathshala_interface::GenerationDriver;
use serde_json::Value;
use tracing::{debug, info, instrument};

#[instrument(
    skip(driver, prompt),
    fields(provider = driver.provider_name(), model = driver.model_name())
)]
async fn invoke<D: GenerationDriver>(
    driver: &D,
    prompt: &AssembledPrompt,
) -> PathshalaResult<Output> {
    let request = GenerateRequestBuilder::default()
        .instruction(prompt.instruction().clone())
        .response_schema(prompt.schema().clone())
        .web_search(prompt.web_search())
        .build()
        .map_err(|e| BuilderError::new(BuilderErrorKind::GenerateRequest(e.to_string())))?;

    debug!(
        instruction_len = request.instruction().len(),
        web_search = request.web_search(),
        "Sending generation request"
    );
    let response = driver.generate(&request).await?;
    debug!(tool_calls = response.tool_calls(), "Generation finished");
    Ok(response.output().clone())
}

/// Lesson generation: request in, validated bundle out.
///
/// # Examples
///
/// ```rust,ignore
/// use pathshala_lesson::LessonPipeline;
///
/// let pipeline = LessonPipeline::new(driver);
/// let bundle = pipeline.run(&request).await?;
/// println!("{}", bundle.english_content());
/// ```
#[derive(Debug, Clone)]
pub struct LessonPipeline<D: GenerationDriver> {
    driver: D,
}

impl<D: GenerationDriver> LessonPipeline<D> {
    /// Create a pipeline around a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The driver used for generation.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a lesson for an already validated request.
    ///
    /// # Errors
    ///
    /// Propagates generation failures untouched and returns a schema error
    /// when the answer does not match the bundle contract.
    #[instrument(
        skip(self, request),
        fields(topic = %request.topic(), methods = %request.methods_label())
    )]
    pub async fn run(&self, request: &LessonRequest) -> PathshalaResult<LessonContentBundle> {
        let prompt = assemble_lesson_prompt(request);
        info!(
            question_paper = prompt.is_question_paper(),
            "Generating lesson"
        );
        let output = invoke(&self.driver, &prompt).await?;
        let bundle = validate_bundle(&output, prompt.is_question_paper())?;
        info!("Lesson generated");
        Ok(bundle)
    }

    /// Validate an untyped request, then generate.
    ///
    /// A request that fails validation never reaches the driver.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or any error from [`Self::run`].
    #[instrument(skip(self, candidate))]
    pub async fn run_candidate(&self, candidate: &Value) -> PathshalaResult<LessonContentBundle> {
        let request = validate_request(candidate)?;
        self.run(&request).await
    }
}

/// Standalone board-exam question papers.
#[derive(Debug, Clone)]
pub struct QuestionPaperPipeline<D: GenerationDriver> {
    driver: D,
}

impl<D: GenerationDriver> QuestionPaperPipeline<D> {
    /// Create a pipeline around a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Generate a question paper with its answer key.
    ///
    /// # Errors
    ///
    /// Fails on a blank subject before any call is made, on generation
    /// failure, or when the paper or answer key is missing.
    #[instrument(skip(self, request), fields(subject = %request.subject(), kind = %request.kind()))]
    pub async fn run(
        &self,
        request: &QuestionPaperRequest,
    ) -> PathshalaResult<LessonContentBundle> {
        let prompt = assemble_question_paper_prompt(request)?;
        info!("Generating question paper");
        let output = invoke(&self.driver, &prompt).await?;
        Ok(validate_bundle(&output, true)?)
    }
}

/// Rewrites existing lesson content towards different methods.
#[derive(Debug, Clone)]
pub struct AdaptationPipeline<D: GenerationDriver> {
    driver: D,
}

impl<D: GenerationDriver> AdaptationPipeline<D> {
    /// Create a pipeline around a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Adapt content to the request's methods.
    ///
    /// # Errors
    ///
    /// Fails without calling the driver when every existing content field
    /// is blank.
    #[instrument(skip(self, request), fields(topic = %request.request().topic()))]
    pub async fn run(&self, request: &AdaptationRequest) -> PathshalaResult<AdaptedContent> {
        let has_content = [
            request.content_english(),
            request.content_kannada(),
            request.content_urdu(),
        ]
        .iter()
        .any(|c| !c.trim().is_empty());
        if !has_content {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "lessonContent".to_string(),
            ))
            .into());
        }

        let prompt = assemble_adaptation_prompt(request);
        info!(methods = %request.request().methods_label(), "Adapting lesson");
        let output = invoke(&self.driver, &prompt).await?;
        Ok(validate_adapted(&output)?)
    }
}

/// Lesson text to slide deck.
#[derive(Debug, Clone)]
pub struct SlidePipeline<D: GenerationDriver> {
    driver: D,
}

impl<D: GenerationDriver> SlidePipeline<D> {
    /// Create a pipeline around a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Decompose lesson text into 5 to 10 slides.
    ///
    /// # Errors
    ///
    /// Rejects blank lesson text before any call. Fails on generation error
    /// or when the deck breaks the structural check.
    #[instrument(
        skip(self, request),
        fields(topic = %request.topic(), text_len = request.lesson_content().len())
    )]
    pub async fn run(&self, request: &SlideRequest) -> PathshalaResult<SlideDeck> {
        if request.lesson_content().trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "lessonContent".to_string(),
            ))
            .into());
        }

        let prompt = assemble_slide_prompt(request);
        info!("Generating slides");
        let output = invoke(&self.driver, &prompt).await?;
        let deck = validate_slides(&output)?;
        info!(slides = deck.len(), "Slides generated");
        Ok(deck)
    }
}

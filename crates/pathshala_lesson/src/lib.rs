//! Lesson generation pipelines for Pathshala.
//!
//! The pieces run in a fixed order for every flow:
//!
//! 1. [`validate_request`] gates untyped input before any external call
//! 2. The `assemble_*` functions render the instruction and output schema
//! 3. A [`GenerationDriver`](pathshala_interface::GenerationDriver) makes one call
//! 4. The `validate_*` functions check the answer and return typed content
//!
//! The pipelines ([`LessonPipeline`], [`QuestionPaperPipeline`],
//! [`AdaptationPipeline`], [`SlidePipeline`]) wire those steps together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod pipeline;
mod prompt;
mod request_validator;
mod response_validator;
mod schema;

pub use extraction::extract_json;
pub use pipeline::{AdaptationPipeline, LessonPipeline, QuestionPaperPipeline, SlidePipeline};
pub use prompt::{
    AssembledPrompt, MIN_REPEATED_QUESTIONS, assemble_adaptation_prompt, assemble_lesson_prompt,
    assemble_question_paper_prompt, assemble_slide_prompt,
};
pub use request_validator::validate_request;
pub use response_validator::{validate_adapted, validate_bundle, validate_slides};
pub use schema::{
    adapted_content_schema, check_conformance, lesson_bundle_schema, slide_deck_schema,
};

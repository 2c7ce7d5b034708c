//! Core data types for the Pathshala lesson generation pipeline.
//!
//! This crate holds the contract types every other crate agrees on: the
//! validated lesson request, the multilingual content bundle the model must
//! return, slide decks, saved lesson records and the provider-neutral
//! generation request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapted;
mod bundle;
mod generation;
mod language;
mod method;
mod record;
mod request;
mod slide;

pub use adapted::AdaptedContent;
pub use bundle::{LessonContentBundle, LessonContentBundleBuilder};
pub use generation::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Output};
pub use language::Language;
pub use method::TeachingMethod;
pub use record::SavedLessonRecord;
pub use request::{
    AdaptationRequest, LessonRequest, LessonRequestBuilder, MIN_TOPIC_CHARS, QuestionPaperKind,
    QuestionPaperRequest, SlideRequest,
};
pub use slide::{MAX_SLIDES, MIN_SLIDES, Slide, SlideDeck};

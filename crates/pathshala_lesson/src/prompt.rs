//! Instruction documents for every generation flow.
//!
//! All assemblers are pure: the same request always yields the same
//! instruction and schema.

use crate::schema::{adapted_content_schema, lesson_bundle_schema, slide_deck_schema};
use pathshala_core::{
    AdaptationRequest, Language, LessonContentBundle, LessonRequest, MAX_SLIDES, MIN_SLIDES,
    QuestionPaperKind, QuestionPaperRequest, SlideRequest, TeachingMethod,
};
use pathshala_error::ValidationError;
use serde_json::Value;
use std::fmt::Write;

/// Repeated questions asked for alongside every lesson.
pub const MIN_REPEATED_QUESTIONS: usize = 10;

/// An instruction document plus the schema its answer must satisfy.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct AssembledPrompt {
    /// Natural-language instruction sent to the model
    instruction: String,
    /// Output schema descriptor
    schema: Value,
    /// Whether the question-paper branch was taken
    #[getter(skip)]
    is_question_paper: bool,
    /// Whether the model should be offered web search
    #[getter(skip)]
    web_search: bool,
}

impl AssembledPrompt {
    /// Whether the question-paper branch was taken.
    pub fn is_question_paper(&self) -> bool {
        self.is_question_paper
    }

    /// Whether the model should be offered web search.
    pub fn web_search(&self) -> bool {
        self.web_search
    }
}

fn fields_for(language: Language) -> String {
    let mut fields = vec![language.content_field()];
    fields.extend(
        LessonContentBundle::OPTIONAL_SECTIONS
            .iter()
            .map(|section| language.suffixed(section)),
    );
    fields.join(", ")
}

fn language_rule(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{}", heading);
    for lang in Language::ALL {
        let _ = writeln!(
            out,
            "- {}: write only in {}. Fields: {}.",
            lang,
            lang,
            fields_for(lang)
        );
    }
    out.push_str("Never mix languages inside a single field.\n");
}

/// Render the lesson instruction for a validated request.
///
/// The question-paper branch is taken when `Question Paper` is among the
/// requested methods.
///
/// # Examples
///
/// ```
/// use pathshala_core::{LessonRequestBuilder, TeachingMethod};
/// use pathshala_lesson::assemble_lesson_prompt;
///
/// let request = LessonRequestBuilder::default()
///     .topic("Photosynthesis")
///     .grade_level("Grade 6")
///     .teaching_methods(vec![TeachingMethod::Story])
///     .build()
///     .unwrap();
/// let prompt = assemble_lesson_prompt(&request);
/// assert!(!prompt.is_question_paper());
/// assert!(prompt.instruction().contains("Photosynthesis"));
/// ```
pub fn assemble_lesson_prompt(request: &LessonRequest) -> AssembledPrompt {
    let is_question_paper = request.is_question_paper();
    let mut out = String::new();

    out.push_str(
        "You are an experienced teacher who writes classroom material in English, \
         Kannada and Urdu.\n\
         Respond with a single valid JSON object that follows the response schema exactly.\n\n",
    );
    language_rule(&mut out, "LANGUAGE ISOLATION (MANDATORY):");

    let _ = write!(
        out,
        "\nTopic: {}\nGrade Level: {}\nTeaching Methods: {}\n\n",
        request.topic(),
        request.grade_level(),
        request.methods_label()
    );

    out.push_str(
        "RESEARCH:\n\
         If a searchWeb tool is available, use it to gather accurate and current information \
         about the topic before writing.\n\
         If the topic is an author or poet, include a short biography and an overview of their \
         major works in every language. If the topic is a broad literary subject, cover several \
         representative authors in the same way.\n\n",
    );

    if is_question_paper {
        write_question_paper_task(&mut out, request);
    } else {
        write_lesson_task(&mut out, request);
    }

    let _ = write!(
        out,
        "\nTEACHER REFERENCE:\n\
         Also prepare at least {} frequently repeated exam questions on this topic with detailed \
         answers. They are for the teacher's private reference and are never shown to students. \
         Put the questions in repeatedQuestionsEnglish, repeatedQuestionsKannada and \
         repeatedQuestionsUrdu, and the answers, numbered to match, in repeatedAnswersEnglish, \
         repeatedAnswersKannada and repeatedAnswersUrdu.\n\n",
        MIN_REPEATED_QUESTIONS
    );

    language_rule(&mut out, "REMINDER:");

    AssembledPrompt {
        instruction: out,
        schema: lesson_bundle_schema(is_question_paper),
        is_question_paper,
        web_search: true,
    }
}

fn write_question_paper_task(out: &mut String, request: &LessonRequest) {
    let _ = write!(
        out,
        "TASK:\n\
         Create a comprehensive, printable question paper suitable for preparing {} students \
         for examinations up to the year 2025. Prefer long, descriptive questions.\n\
         Structure the paper as follows:\n\
         - Divide it into sections labelled with Roman numerals (I, II, III, ...).\n\
         - Number the questions with Arabic numerals (1, 2, 3, ...).\n\
         - Label sub-questions and answer options with lowercase letters (a, b, c, ...).\n\
         Include a mix of multiple choice, fill in the blanks, short answer, long answer, \
         essay writing, letter writing and grammar exercises.\n\
         Put the paper in questionPaperEnglish, questionPaperKannada and questionPaperUrdu.\n\
         Write a separate, detailed answer key in answerKeyEnglish, answerKeyKannada and \
         answerKeyUrdu. The answer key must use the same numbering scheme as the question \
         paper: the same Roman-numeral sections, the same question numbers and the same \
         sub-question letters, so every answer matches its question. Give full model answers \
         for descriptive, essay and letter-writing questions.\n\
         In englishContent, kannadaContent and urduContent write only a brief introduction or \
         summary of the paper.\n",
        request.grade_level()
    );

    let others: Vec<&TeachingMethod> = request
        .teaching_methods()
        .iter()
        .filter(|m| **m != TeachingMethod::QuestionPaper)
        .collect();
    if !others.is_empty() {
        out.push_str("Where they fit the paper, also:\n");
        for method in others {
            let _ = writeln!(out, "- {}", method.guidance());
        }
    }
}

fn write_lesson_task(out: &mut String, request: &LessonRequest) {
    out.push_str(
        "TASK:\n\
         Write the lesson content for the topic based on the teaching methods above:\n",
    );
    for method in request.teaching_methods() {
        let _ = writeln!(out, "- {}", method.guidance());
    }
    out.push_str(
        "Put the lesson in englishContent, kannadaContent and urduContent.\n\
         This request does not ask for an exam. Still include the keys questionPaperEnglish, \
         questionPaperKannada, questionPaperUrdu, answerKeyEnglish, answerKeyKannada and \
         answerKeyUrdu, each set to an empty string \"\". Do not omit these keys.\n",
    );
}

/// Render the instruction for a standalone board-exam question paper.
///
/// # Errors
///
/// Fails when the subject is blank.
pub fn assemble_question_paper_prompt(
    request: &QuestionPaperRequest,
) -> Result<AssembledPrompt, ValidationError> {
    let lesson = request.to_lesson_request()?;
    let mut prompt = assemble_lesson_prompt(&lesson);

    let sitting = match request.kind() {
        QuestionPaperKind::Annual => {
            "This is the annual board examination paper. Cover the full syllabus for the subject."
        }
        QuestionPaperKind::Supplementary => {
            "This is the supplementary examination paper for students re-sitting the subject. \
             Match the difficulty and coverage of the annual paper without repeating its questions."
        }
    };
    prompt.instruction = format!(
        "{}\nEXAMINATION:\nSubject: {}\n{}\n",
        prompt.instruction,
        request.subject().trim(),
        sitting
    );
    Ok(prompt)
}

/// Render the instruction for adapting existing content to new methods.
pub fn assemble_adaptation_prompt(request: &AdaptationRequest) -> AssembledPrompt {
    let lesson = request.request();
    let mut out = String::new();

    out.push_str(
        "You are an experienced teacher adapting existing lesson content.\n\
         Rewrite the lesson below so it follows the teaching methods listed. Keep every fact \
         unchanged; change only the presentation.\n\
         Respond with a single valid JSON object that follows the response schema exactly.\n\n",
    );
    let _ = write!(
        out,
        "Topic: {}\nGrade Level: {}\nTeaching Methods: {}\n\n",
        lesson.topic(),
        lesson.grade_level(),
        lesson.methods_label()
    );
    out.push_str("Apply the methods as follows:\n");
    for method in lesson.teaching_methods() {
        let _ = writeln!(out, "- {}", method.guidance());
    }

    for lang in Language::ALL {
        let _ = write!(
            out,
            "\nEXISTING {} CONTENT:\n<<<\n{}\n>>>\n",
            lang.to_string().to_uppercase(),
            request.content(lang).trim()
        );
    }

    out.push('\n');
    for lang in Language::ALL {
        let _ = writeln!(
            out,
            "Write the adapted {} content in adaptedContent{}, using only {}.",
            lang, lang, lang
        );
    }
    out.push_str("Never mix languages inside a single field.\n");

    AssembledPrompt {
        instruction: out,
        schema: adapted_content_schema(),
        is_question_paper: false,
        web_search: false,
    }
}

/// Render the slide decomposition instruction.
pub fn assemble_slide_prompt(request: &SlideRequest) -> AssembledPrompt {
    let mut out = String::new();
    let _ = write!(
        out,
        "You are an expert instructional designer who turns lesson text into a slide \
         presentation.\n\n\
         Topic: {topic}\n\
         Grade Level: {grade}\n\n\
         Rules:\n\
         1. The first slide is a title slide introducing the topic.\n\
         2. Break the lesson into logical sections, one main idea per slide.\n\
         3. Give every slide a clear, short title and a body of bullet points in markdown.\n\
         4. Give every slide speaker notes the teacher can read aloud.\n\
         5. Produce between {min} and {max} slides in total.\n\
         6. Use language appropriate for {grade}.\n\n\
         Respond with a single valid JSON object of the form \
         {{\"slides\": [{{\"title\": ..., \"content\": ..., \"speakerNotes\": ...}}]}}.\n\n\
         LESSON CONTENT:\n<<<\n{content}\n>>>\n",
        topic = request.topic(),
        grade = request.grade_level(),
        min = MIN_SLIDES,
        max = MAX_SLIDES,
        content = request.lesson_content().trim(),
    );

    AssembledPrompt {
        instruction: out,
        schema: slide_deck_schema(),
        is_question_paper: false,
        web_search: false,
    }
}

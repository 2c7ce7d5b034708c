//! Properties of assembled lesson instructions.

use pathshala_core::{
    LessonRequest, LessonRequestBuilder, QuestionPaperKind, QuestionPaperRequest, TeachingMethod,
};
use pathshala_lesson::{assemble_lesson_prompt, assemble_question_paper_prompt};
use strum::IntoEnumIterator;

fn request(methods: Vec<TeachingMethod>) -> LessonRequest {
    LessonRequestBuilder::default()
        .topic("Photosynthesis")
        .grade_level("Grade 6")
        .teaching_methods(methods)
        .build()
        .expect("valid request")
}

#[test]
fn every_method_name_appears_exactly_once() {
    for method in TeachingMethod::iter() {
        let prompt = assemble_lesson_prompt(&request(vec![method]));
        let occurrences = prompt.instruction().matches(method.as_str()).count();
        assert_eq!(occurrences, 1, "{} appeared {} times", method, occurrences);
    }
}

#[test]
fn combined_methods_are_listed_in_request_order() {
    let prompt = assemble_lesson_prompt(&request(vec![
        TeachingMethod::Quiz,
        TeachingMethod::Analogy,
        TeachingMethod::AiSummary,
    ]));
    assert!(
        prompt
            .instruction()
            .contains("Teaching Methods: Quiz, Analogy, AI Summary")
    );
    for method in [TeachingMethod::Quiz, TeachingMethod::Analogy, TeachingMethod::AiSummary] {
        assert_eq!(prompt.instruction().matches(method.as_str()).count(), 1);
    }
}

#[test]
fn lesson_branch_requires_empty_exam_fields() {
    for method in TeachingMethod::iter().filter(|m| *m != TeachingMethod::QuestionPaper) {
        let prompt = assemble_lesson_prompt(&request(vec![method]));
        assert!(!prompt.is_question_paper());
        assert!(!prompt.instruction().contains("Roman"));
        assert!(prompt.instruction().contains("empty string \"\""));
        assert!(prompt.instruction().contains("Do not omit these keys"));
        assert!(prompt.instruction().contains("questionPaperEnglish"));
        assert!(prompt.instruction().contains("answerKeyUrdu"));
    }
}

#[test]
fn question_paper_branch_asks_for_structured_exam() {
    let prompt = assemble_lesson_prompt(&request(vec![TeachingMethod::QuestionPaper]));
    assert!(prompt.is_question_paper());
    let text = prompt.instruction();
    assert!(text.contains("Roman numerals (I, II, III"));
    assert!(text.contains("lowercase letters (a, b, c"));
    assert!(text.contains("multiple choice"));
    assert!(text.contains("letter writing"));
    assert!(text.contains("same numbering scheme"));
    assert!(text.contains("up to the year 2025"));
    assert!(!text.contains("empty string \"\""));

    let required = prompt.schema()["required"].as_array().expect("required list");
    assert!(required.iter().any(|f| f == "questionPaperEnglish"));
    assert!(required.iter().any(|f| f == "answerKeyKannada"));
}

#[test]
fn branches_differ_only_by_question_paper() {
    let lesson = assemble_lesson_prompt(&request(vec![TeachingMethod::Story]));
    let exam = assemble_lesson_prompt(&request(vec![
        TeachingMethod::Story,
        TeachingMethod::QuestionPaper,
    ]));
    assert_ne!(lesson.schema(), exam.schema());
    assert!(exam.instruction().contains(TeachingMethod::Story.guidance()));
}

#[test]
fn every_lesson_prompt_covers_shared_rules() {
    for methods in [vec![TeachingMethod::Story], vec![TeachingMethod::QuestionPaper]] {
        let prompt = assemble_lesson_prompt(&request(methods));
        let text = prompt.instruction();
        assert!(text.contains("Topic: Photosynthesis"));
        assert!(text.contains("Grade Level: Grade 6"));
        assert!(text.contains("at least 10"));
        assert!(text.contains("repeatedAnswersKannada"));
        assert!(text.contains("searchWeb"));
        assert!(text.contains("biography"));
        assert_eq!(text.matches("Never mix languages inside a single field.").count(), 2);
        assert!(prompt.web_search());
    }
}

#[test]
fn standalone_paper_targets_grade_ten() {
    let prompt = assemble_question_paper_prompt(&QuestionPaperRequest::new(
        "Science".to_string(),
        QuestionPaperKind::Annual,
    ))
    .expect("valid subject");
    assert!(prompt.is_question_paper());
    assert!(prompt.instruction().contains("Grade Level: Grade 10"));
    assert!(prompt.instruction().contains("Subject: Science"));
    assert!(prompt.instruction().contains("annual board examination"));
}

#[test]
fn blank_subject_is_rejected() {
    let result = assemble_question_paper_prompt(&QuestionPaperRequest::new(
        "   ".to_string(),
        QuestionPaperKind::Supplementary,
    ));
    assert!(result.is_err());
}

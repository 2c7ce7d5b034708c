//! End-to-end pipeline behavior against a scripted driver.

mod test_utils;

use pathshala_core::{
    Language, LessonContentBundleBuilder, LessonRequestBuilder, Output, QuestionPaperKind,
    QuestionPaperRequest, SlideRequest, TeachingMethod,
};
use pathshala_error::{GenerationErrorKind, PathshalaErrorKind, SchemaErrorKind};
use pathshala_lesson::{AdaptationPipeline, LessonPipeline, QuestionPaperPipeline, SlidePipeline};
use serde_json::{Value, json};
use test_utils::{MockDriver, MockResponse};

fn lesson_answer() -> Value {
    json!({
        "englishContent": "Once upon a time a leaf met the sun...",
        "kannadaContent": "ಒಂದು ಕಾಲದಲ್ಲಿ ಒಂದು ಎಲೆ ಸೂರ್ಯನನ್ನು ಭೇಟಿಯಾಯಿತು...",
        "urduContent": "ایک دفعہ کا ذکر ہے کہ ایک پتہ سورج سے ملا...",
        "questionPaperEnglish": "",
        "questionPaperKannada": "",
        "questionPaperUrdu": "",
        "answerKeyEnglish": "",
        "answerKeyKannada": "",
        "answerKeyUrdu": "",
        "repeatedQuestionsEnglish": "1. What is chlorophyll?",
        "repeatedAnswersEnglish": "1. The green pigment in leaves."
    })
}

fn slide_answer(count: usize) -> Value {
    let slides: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "title": format!("Part {}", i),
                "content": "- Leaves capture sunlight\n- Water rises from roots",
                "speakerNotes": "Ask the class where plants get energy."
            })
        })
        .collect();
    json!({ "slides": slides })
}

#[tokio::test]
async fn story_lesson_validates() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(Output::Json(lesson_answer()));
    let pipeline = LessonPipeline::new(driver.clone());

    let bundle = pipeline
        .run_candidate(&json!({
            "topic": "Photosynthesis",
            "gradeLevel": "Grade 6",
            "teachingMethods": ["Story"]
        }))
        .await?;

    assert_eq!(driver.call_count(), 1);
    assert_eq!(bundle.question_paper(Language::English), Some(""));
    assert!(!bundle.has_question_paper());
    assert!(bundle.content(Language::Urdu).starts_with("ایک"));

    let request = driver.last_request().expect("one request sent");
    assert!(request.web_search());
    assert!(request.instruction().contains("Teaching Methods: Story"));
    let required = request.response_schema().as_ref().expect("schema sent")["required"]
        .as_array()
        .expect("required list")
        .len();
    assert_eq!(required, 3);
    Ok(())
}

#[tokio::test]
async fn question_paper_answer_missing_paper_is_rejected() -> anyhow::Result<()> {
    let mut answer = lesson_answer();
    answer
        .as_object_mut()
        .expect("object")
        .remove("questionPaperEnglish");
    let driver = MockDriver::new_success(Output::Json(answer));
    let pipeline = LessonPipeline::new(driver.clone());

    let err = pipeline
        .run_candidate(&json!({
            "topic": "Photosynthesis",
            "gradeLevel": "Grade 6",
            "teachingMethods": ["Question Paper"]
        }))
        .await
        .expect_err("missing question paper must fail");

    assert!(err.is_schema());
    match err.kind() {
        PathshalaErrorKind::Schema(schema) => {
            assert_eq!(
                schema.kind,
                SchemaErrorKind::MissingField("$.questionPaperEnglish".into())
            );
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_request_never_reaches_driver() {
    let driver = MockDriver::new_success(Output::Json(lesson_answer()));
    let pipeline = LessonPipeline::new(driver.clone());

    for candidate in [
        json!({"gradeLevel": "Grade 6", "teachingMethods": ["Story"]}),
        json!({"topic": "Photosynthesis", "gradeLevel": "Grade 6", "teachingMethods": []}),
        json!({"topic": 42, "gradeLevel": "Grade 6", "teachingMethods": ["Story"]}),
        json!({"topic": "Photosynthesis", "gradeLevel": "Grade 6", "teachingMethods": ["Dance"]}),
    ] {
        let err = pipeline
            .run_candidate(&candidate)
            .await
            .expect_err("invalid request");
        assert!(err.is_validation(), "{}", err);
    }
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_propagates_untouched() {
    let driver = MockDriver::new_error(GenerationErrorKind::Http {
        status_code: 503,
        message: "overloaded".into(),
    });
    let pipeline = LessonPipeline::new(driver.clone());
    let request = LessonRequestBuilder::default()
        .topic("Photosynthesis")
        .grade_level("Grade 6")
        .teaching_methods(vec![TeachingMethod::Quiz])
        .build()
        .expect("valid request");

    let err = pipeline.run(&request).await.expect_err("driver failed");
    match err.kind() {
        PathshalaErrorKind::Generation(generation) => {
            assert_eq!(
                generation.kind,
                GenerationErrorKind::Http {
                    status_code: 503,
                    message: "overloaded".into()
                }
            );
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn fenced_text_answer_is_accepted() -> anyhow::Result<()> {
    let text = format!(
        "Here is the lesson you asked for:\n```json\n{}\n```",
        lesson_answer()
    );
    let pipeline = LessonPipeline::new(MockDriver::new_success(Output::Text(text)));
    let request = LessonRequestBuilder::default()
        .topic("Photosynthesis")
        .grade_level("Grade 6")
        .teaching_methods(vec![TeachingMethod::Story])
        .build()?;

    let bundle = pipeline.run(&request).await?;
    assert_eq!(
        bundle.repeated_answers(Language::English),
        Some("1. The green pigment in leaves.")
    );
    Ok(())
}

#[tokio::test]
async fn standalone_question_paper_round_trip() -> anyhow::Result<()> {
    let mut answer = lesson_answer();
    for lang in Language::ALL {
        answer[lang.suffixed("questionPaper")] = json!("I. Multiple choice\n1. (a) ... (b) ...");
        answer[lang.suffixed("answerKey")] = json!("I.\n1. (a)");
    }
    let driver = MockDriver::new_success(Output::Json(answer));
    let pipeline = QuestionPaperPipeline::new(driver.clone());

    let bundle = pipeline
        .run(&QuestionPaperRequest::new(
            "Science".to_string(),
            QuestionPaperKind::Annual,
        ))
        .await?;

    assert!(bundle.has_question_paper());
    let request = driver.last_request().expect("one request sent");
    assert!(
        request
            .instruction()
            .contains("Topic: Science - Annual Question Paper")
    );
    Ok(())
}

#[tokio::test]
async fn slides_fit_bounds() -> anyhow::Result<()> {
    let bundle = LessonContentBundleBuilder::default()
        .english_content("Plants use sunlight, water and air to make food. ".repeat(40))
        .kannada_content("ಸಸ್ಯಗಳು ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ.")
        .urdu_content("پودے خوراک بناتے ہیں۔")
        .build()?;
    let request =
        SlideRequest::from_bundle("Photosynthesis", "Grade 6", &bundle, Language::English);

    let driver = MockDriver::new_success(Output::Json(slide_answer(7)));
    let pipeline = SlidePipeline::new(driver.clone());
    let deck = pipeline.run(&request).await?;

    assert!((5..=10).contains(&deck.len()));
    for slide in deck.slides() {
        assert!(!slide.title().is_empty());
        assert!(!slide.content().is_empty());
    }
    assert!(!driver.last_request().expect("one request sent").web_search());
    Ok(())
}

#[tokio::test]
async fn oversized_deck_is_rejected() {
    let pipeline = SlidePipeline::new(MockDriver::new_success(Output::Json(slide_answer(12))));
    let request = SlideRequest::new(
        "Leaves capture light.".into(),
        "Photosynthesis".into(),
        "Grade 6".into(),
    );

    let err = pipeline.run(&request).await.expect_err("too many slides");
    match err.kind() {
        PathshalaErrorKind::Schema(schema) => assert_eq!(
            schema.kind,
            SchemaErrorKind::SlideCount {
                count: 12,
                min: 5,
                max: 10
            }
        ),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn empty_lesson_text_skips_slide_call() {
    let driver = MockDriver::new_success(Output::Json(slide_answer(6)));
    let pipeline = SlidePipeline::new(driver.clone());
    let request = SlideRequest::new("  \n ".into(), "Photosynthesis".into(), "Grade 6".into());

    let err = pipeline.run(&request).await.expect_err("empty text");
    assert!(err.is_validation());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn adaptation_returns_all_languages() -> anyhow::Result<()> {
    let bundle = LessonContentBundleBuilder::default()
        .english_content("Plants make food.")
        .kannada_content("ಸಸ್ಯಗಳು ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ.")
        .urdu_content("پودے خوراک بناتے ہیں۔")
        .build()?;
    let request = LessonRequestBuilder::default()
        .topic("Photosynthesis")
        .grade_level("Grade 6")
        .teaching_methods(vec![TeachingMethod::Analogy])
        .build()?;
    let driver = MockDriver::new_sequence(vec![MockResponse::Success(Output::Json(json!({
        "adaptedContentEnglish": "A leaf is a tiny kitchen.",
        "adaptedContentKannada": "ಎಲೆ ಒಂದು ಸಣ್ಣ ಅಡುಗೆಮನೆ.",
        "adaptedContentUrdu": "پتہ ایک چھوٹا باورچی خانہ ہے۔"
    })))]);
    let pipeline = AdaptationPipeline::new(driver.clone());

    let adapted = pipeline
        .run(&pathshala_core::AdaptationRequest::from_bundle(request, &bundle))
        .await?;

    assert_eq!(adapted.content(Language::English), "A leaf is a tiny kitchen.");
    assert!(
        driver
            .last_request()
            .expect("one request sent")
            .instruction()
            .contains("Plants make food.")
    );
    Ok(())
}

//! Printing results for people and scripts.

use super::commands::OutputFormat;
use pathshala::{
    AdaptedContent, JsonError, JsonErrorKind, Language, LessonContentBundle, PathshalaResult,
    SavedLessonRecord, SlideDeck,
};
use serde::Serialize;
use std::fmt::Write;

fn to_json<T: Serialize + ?Sized>(value: &T) -> PathshalaResult<String> {
    Ok(serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(JsonErrorKind::Encode(e.to_string())))?)
}

fn section(out: &mut String, heading: &str, body: Option<&str>) {
    let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) else {
        return;
    };
    let _ = writeln!(out, "## {}\n\n{}\n", heading, body);
}

/// Human-readable lesson: every language, primary content first.
pub fn bundle_text(bundle: &LessonContentBundle) -> String {
    let mut out = String::new();
    for lang in Language::ALL {
        let _ = writeln!(out, "# {}\n", lang);
        section(&mut out, "Lesson", Some(bundle.content(lang)));
        section(&mut out, "Question Paper", bundle.question_paper(lang));
        section(&mut out, "Answer Key", bundle.answer_key(lang));
        section(&mut out, "Repeated Questions", bundle.repeated_questions(lang));
        section(&mut out, "Repeated Answers", bundle.repeated_answers(lang));
    }
    out
}

/// Human-readable slide deck.
pub fn deck_text(deck: &SlideDeck) -> String {
    let mut out = String::new();
    for (i, slide) in deck.slides().iter().enumerate() {
        let _ = writeln!(out, "--- Slide {} of {} ---", i + 1, deck.len());
        let _ = writeln!(out, "# {}\n\n{}\n", slide.title(), slide.content().trim());
        if !slide.speaker_notes().trim().is_empty() {
            let _ = writeln!(out, "Notes: {}\n", slide.speaker_notes().trim());
        }
    }
    out
}

/// Human-readable adaptation result.
pub fn adapted_text(adapted: &AdaptedContent) -> String {
    let mut out = String::new();
    for lang in Language::ALL {
        let _ = writeln!(out, "# {}\n\n{}\n", lang, adapted.content(lang).trim());
    }
    out
}

/// One line per saved lesson.
pub fn record_line(record: &SavedLessonRecord) -> String {
    format!(
        "{}  {}  {}",
        record.id(),
        record.saved_at().format("%Y-%m-%d %H:%M"),
        record.topic()
    )
}

/// Print a lesson bundle.
pub fn print_bundle(bundle: &LessonContentBundle, format: OutputFormat) -> PathshalaResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(bundle)?),
        OutputFormat::Human => print!("{}", bundle_text(bundle)),
    }
    Ok(())
}

/// Print a slide deck.
pub fn print_deck(deck: &SlideDeck, format: OutputFormat) -> PathshalaResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(deck)?),
        OutputFormat::Human => print!("{}", deck_text(deck)),
    }
    Ok(())
}

/// Print adapted content.
pub fn print_adapted(adapted: &AdaptedContent, format: OutputFormat) -> PathshalaResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(adapted)?),
        OutputFormat::Human => print!("{}", adapted_text(adapted)),
    }
    Ok(())
}

/// Print the saved lesson list.
pub fn print_records(records: &[SavedLessonRecord], format: OutputFormat) -> PathshalaResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(records)?),
        OutputFormat::Human => {
            println!("Saved lessons:");
            println!("{:-<80}", "");
            for record in records {
                println!("{}", record_line(record));
            }
            println!("{:-<80}", "");
            println!("Total: {} lessons", records.len());
        }
    }
    Ok(())
}

/// Print one saved lesson.
pub fn print_record(record: &SavedLessonRecord, format: OutputFormat) -> PathshalaResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(record)?),
        OutputFormat::Human => {
            println!("{}\n", record_line(record));
            print!("{}", bundle_text(record.lesson_content()));
        }
    }
    Ok(())
}

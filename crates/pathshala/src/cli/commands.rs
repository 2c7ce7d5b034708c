//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pathshala::{Language, QuestionPaperKind, TeachingMethod};
use std::path::PathBuf;

/// Pathshala - multilingual lessons, question papers and slides for teachers
#[derive(Parser, Debug)]
#[command(name = "pathshala")]
#[command(
    about = "Multilingual lessons, question papers and slides for teachers",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a lesson in English, Kannada and Urdu
    Lesson {
        /// Lesson topic
        #[arg(long)]
        topic: String,

        /// Grade label, e.g. "Grade 6"
        #[arg(long)]
        grade: String,

        /// Teaching method; repeat for several (e.g. --method Story --method "Question Paper")
        #[arg(long = "method", required = true)]
        methods: Vec<TeachingMethod>,

        /// Save the lesson to the library
        #[arg(long)]
        save: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a Grade 10 board-exam question paper
    QuestionPaper {
        /// Exam subject
        #[arg(long)]
        subject: String,

        /// Annual or supplementary sitting
        #[arg(long, default_value = "annual")]
        kind: QuestionPaperKind,

        /// Save the paper to the library
        #[arg(long)]
        save: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Split a lesson into a slide deck
    Slides {
        /// Where the lesson comes from
        #[command(flatten)]
        source: LessonSource,

        /// Topic; defaults to the saved lesson's topic
        #[arg(long)]
        topic: Option<String>,

        /// Grade label used to pitch the slides
        #[arg(long)]
        grade: String,

        /// Language of the lesson text to use
        #[arg(long, default_value = "english")]
        language: LanguageArg,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Rewrite a saved lesson for different teaching methods
    Adapt {
        /// Saved lesson id
        #[arg(long)]
        id: String,

        /// Grade label
        #[arg(long)]
        grade: String,

        /// Teaching method; repeat for several
        #[arg(long = "method", required = true)]
        methods: Vec<TeachingMethod>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Saved lesson management
    #[command(subcommand)]
    Library(LibraryCommands),
}

/// A saved lesson or a bundle file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct LessonSource {
    /// Saved lesson id
    #[arg(long)]
    pub id: Option<String>,

    /// Path to a lesson bundle JSON file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Saved lesson subcommands
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved lessons, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one saved lesson
    Show {
        /// Saved lesson id
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete a saved lesson
    Delete {
        /// Saved lesson id
        id: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Lesson language selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageArg {
    /// English
    English,
    /// Kannada
    Kannada,
    /// Urdu
    Urdu,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Kannada => Language::Kannada,
            LanguageArg::Urdu => Language::Urdu,
        }
    }
}

// Colored terminal output for analysis reports and word-count listings.

use colored::Colorize;

use crate::document::Document;
use crate::report::AnalysisReport;
use crate::text::frequency;

/// Widest source id shown before it gets truncated.
const SOURCE_WIDTH: usize = 60;

/// Print the TF / IDF / similarity report.
pub fn display_report(report: &AnalysisReport) {
    println!(
        "\n{}",
        format!("=== Term statistics for '{}' ===", report.target_word).bold()
    );
    println!();

    println!(
        "  {:>3}  {:<62} {:>8} {:>8} {:>6}",
        "#".dimmed(),
        "Source".dimmed(),
        "Words".dimmed(),
        "Unique".dimmed(),
        "Hits".dimmed(),
    );
    println!("  {}", "-".repeat(92).dimmed());

    for (i, source) in report.sources.iter().enumerate() {
        println!(
            "  {:>3}. {:<62} {:>8} {:>8} {:>6}",
            i + 1,
            shorten_source(&source.source_id, SOURCE_WIDTH),
            source.total_words,
            source.unique_words,
            source.target_count,
        );
    }
    println!();

    println!(
        "  Term Frequency (TF) of '{}': {}",
        report.target_word,
        format!("{:.6}", report.term_frequency).bright_green()
    );
    println!(
        "  Inverse Document Frequency (IDF) of '{}': {} ({} of {} documents)",
        report.target_word,
        format!("{:.6}", report.inverse_document_frequency).bright_green(),
        report.documents_with_word,
        report.sources.len(),
    );
    println!(
        "  TF-IDF of '{}': {}",
        report.target_word,
        format!("{:.6}", report.tf_idf).bright_green()
    );
    println!(
        "  Cosine Similarity between documents: {}",
        colorize_similarity(report.cosine_similarity)
    );
    println!();
}

/// Print a document's most frequent words.
pub fn display_word_counts(doc: &Document, top: usize) {
    println!(
        "\n{}",
        format!(
            "=== Word occurrences: {} ({} words, {} unique) ===",
            shorten_source(doc.source_id(), SOURCE_WIDTH),
            doc.total_words(),
            doc.word_counts().len()
        )
        .bold()
    );
    println!();

    for (word, count) in frequency::top_words(doc.word_counts(), top) {
        println!("  {:<30} {:>6}", word, count);
    }
    println!();
}

/// Fit a source id into `max_chars` characters by dropping its front.
///
/// The end of a URL (the page name) is what tells sources apart, so the
/// scheme and host go first. Counts characters, so non-ASCII paths are safe.
pub fn shorten_source(source_id: &str, max_chars: usize) -> String {
    let len = source_id.chars().count();
    if len <= max_chars {
        return source_id.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = source_id.chars().skip(len - keep).collect();
    format!("...{tail}")
}

fn colorize_similarity(value: f64) -> colored::ColoredString {
    let text = format!("{value:.6}");
    if value >= 0.75 {
        text.bright_green()
    } else if value >= 0.25 {
        text.bright_yellow()
    } else {
        text.bright_red()
    }
}

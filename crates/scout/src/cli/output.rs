//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use scout_document::DocumentKind;
use scout_highlight::{Highlighter, highlight_matches};
pub use scout_highlight::{dim, header, subheader, success, warning};
use scout_index::{ScoreBreakdown, ScoredResult, TitleMatch, WeightedScorer};
use scout_session::{NavigationEvent, Phase, RenderFeed};
use serde::Serialize;

/// One ranked result in JSON output.
#[derive(Serialize)]
struct JsonResult<'a> {
    /// 1-based rank.
    rank: usize,
    /// Document id.
    id: u64,
    /// Record category.
    kind: DocumentKind,
    /// Display title.
    title: &'a str,
    /// Secondary line.
    subtitle: &'a str,
    /// Labels.
    tags: &'a [String],
    /// Route opened on confirm.
    target: &'a str,
    /// Relevance score.
    score: u32,
    /// Score contributions, with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

/// JSON output for `scout search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The raw query.
    query: &'a str,
    /// Number of results returned.
    total_matches: usize,
    /// Ranked results.
    results: Vec<JsonResult<'a>>,
}

/// One line of `scout session --json` output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SessionLine<'a> {
    /// Snapshot after a transition.
    Render(&'a RenderFeed),
    /// A confirmed result.
    Navigate(&'a NavigationEvent),
}

/// Prints a value as pretty JSON, syntax-highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", render_json(json, io::stdout().is_terminal()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Colors pretty JSON for a terminal; piped output stays plain.
fn render_json(json: String, color: bool) -> String {
    if color {
        Highlighter::new().highlight_json(&json)
    } else {
        json
    }
}

/// Prints search results as JSON, with score breakdowns when `scorer` is given.
pub fn print_search_json(
    query: &str,
    results: &[ScoredResult],
    scorer: Option<&WeightedScorer>,
) -> ExitCode {
    let output = JsonSearchOutput {
        query,
        total_matches: results.len(),
        results: results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let doc = &hit.document;
                JsonResult {
                    rank: i + 1,
                    id: doc.id,
                    kind: doc.kind,
                    title: &doc.title,
                    subtitle: &doc.subtitle,
                    tags: &doc.tags,
                    target: &doc.target,
                    score: hit.score,
                    breakdown: scorer.map(|s| s.explain(doc, query)),
                }
            })
            .collect(),
    };
    print_json(&output)
}

/// Builds the results table for `scout search`.
pub fn results_table(query: &str, results: &[ScoredResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Title", "Kind", "Subtitle", "Score", "Target"]);

    for (i, hit) in results.iter().enumerate() {
        let doc = &hit.document;
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(highlight_matches(&doc.title, query)),
            Cell::new(doc.kind),
            Cell::new(&doc.subtitle),
            Cell::new(hit.score).set_alignment(CellAlignment::Right),
            Cell::new(&doc.target),
        ]);
    }
    table
}

/// Builds the per-signal score table for `scout search --explain`.
pub fn explain_table(query: &str, results: &[ScoredResult], scorer: &WeightedScorer) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Title", "Title match", "Subtitle", "Tags", "Kind", "Total"]);

    for hit in results {
        let b = scorer.explain(&hit.document, query);
        table.add_row(vec![
            Cell::new(&hit.document.title),
            Cell::new(format!("{} (+{})", title_match_label(b.title_match), b.title)),
            Cell::new(format!("+{}", b.subtitle)),
            Cell::new(format!("{} tags (+{})", b.matched_tags, b.tags)),
            Cell::new(format!("+{}", b.kind)),
            Cell::new(b.total()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Human label for a title signal.
fn title_match_label(title_match: TitleMatch) -> &'static str {
    match title_match {
        TitleMatch::Exact => "exact",
        TitleMatch::Prefix => "prefix",
        TitleMatch::Contains => "contains",
        TitleMatch::None => "none",
    }
}

/// Renders a palette snapshot as text.
pub fn format_feed(feed: &RenderFeed) -> String {
    let mut out = String::new();
    match feed.state {
        Phase::Closed => {
            out.push_str(&dim("(palette closed)"));
            out.push('\n');
            return out;
        }
        Phase::OpenEmpty => {
            if let Some(message) = feed.message() {
                out.push_str(&dim(&message));
                out.push('\n');
            }
            for recent in &feed.recent_queries {
                out.push_str(&format!("   {recent}\n"));
            }
            return out;
        }
        Phase::OpenNoMatches => {
            if let Some(message) = feed.message() {
                out.push_str(&warning(&message));
                out.push('\n');
            }
            return out;
        }
        Phase::OpenWithResults => {}
    }

    out.push_str(&subheader(&format!(
        "{} results for \"{}\"",
        feed.results.len(),
        feed.query
    )));
    out.push('\n');
    for (i, row) in feed.results.iter().enumerate() {
        let marker = if feed.selected_index == Some(i) { ">" } else { " " };
        out.push_str(&format!(
            "{marker} {:>2}. {} {}",
            i + 1,
            highlight_matches(&row.title, &feed.query),
            dim(&format!("[{}]", row.kind))
        ));
        if !row.subtitle.is_empty() {
            out.push_str(&format!(" {}", dim(&row.subtitle)));
        }
        out.push('\n');
    }
    out
}

/// Prints a palette snapshot in the chosen format.
pub fn print_feed(feed: &RenderFeed, json: bool) {
    if json {
        print_json_line(&SessionLine::Render(feed));
    } else {
        print!("{}", format_feed(feed));
    }
}

/// Prints a navigation event in the chosen format.
pub fn print_navigation(event: &NavigationEvent, json: bool) {
    if json {
        print_json_line(&SessionLine::Navigate(event));
    } else {
        println!("{} {}", success("open"), event.target);
    }
}

/// Prints one compact JSON line, reporting serialization failures on stderr.
fn print_json_line<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to serialize JSON: {e}"),
    }
}

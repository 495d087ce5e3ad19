//! Relevance scoring of a document against a raw query.
//!
//! Scores are small additive integers. With the default [`ScoreWeights`]:
//!
//! | signal                              | points |
//! |-------------------------------------|--------|
//! | title equals query                  | 100    |
//! | else title starts with query        | 50     |
//! | else title contains query           | 25     |
//! | subtitle contains query             | 15     |
//! | each tag containing query           | 10     |
//! | kind bonus (client/project/agent/page) | 5/4/3/2 |
//!
//! All comparisons are case-insensitive. The query is compared as typed, without
//! tokenizing or trimming, so multi-word titles can match exactly.

use scout_document::{Document, DocumentKind};
use serde::Serialize;

/// Point values for each scoring signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    /// Title equals the query.
    pub exact_title: u32,
    /// Title starts with the query.
    pub title_prefix: u32,
    /// Title contains the query elsewhere.
    pub title_contains: u32,
    /// Subtitle contains the query.
    pub subtitle_contains: u32,
    /// Added once per tag containing the query.
    pub tag_contains: u32,
    /// Per-kind tie-break bonus.
    pub kind_bonus: KindBonus,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            exact_title: 100,
            title_prefix: 50,
            title_contains: 25,
            subtitle_contains: 15,
            tag_contains: 10,
            kind_bonus: KindBonus::default(),
        }
    }
}

/// Bonus added once per document according to its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindBonus {
    /// Bonus for clients.
    pub client: u32,
    /// Bonus for projects.
    pub project: u32,
    /// Bonus for agents.
    pub agent: u32,
    /// Bonus for static pages.
    pub page: u32,
}

impl Default for KindBonus {
    fn default() -> Self {
        Self {
            client: 5,
            project: 4,
            agent: 3,
            page: 2,
        }
    }
}

impl KindBonus {
    /// The bonus for a kind.
    pub fn for_kind(&self, kind: DocumentKind) -> u32 {
        match kind {
            DocumentKind::Client => self.client,
            DocumentKind::Project => self.project,
            DocumentKind::Agent => self.agent,
            DocumentKind::Page => self.page,
        }
    }
}

/// Computes the relevance of a document for a raw query string.
///
/// Implementations must be deterministic: equal inputs give equal scores.
pub trait Scorer {
    /// Scores `document` against the untokenized query.
    fn score(&self, document: &Document, raw_query: &str) -> u32;
}

/// How the title matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleMatch {
    /// Title equals the query.
    Exact,
    /// Title starts with the query.
    Prefix,
    /// Title contains the query.
    Contains,
    /// Title does not contain the query.
    None,
}

/// Per-signal contributions to a document's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Strongest title signal.
    pub title_match: TitleMatch,
    /// Points from the title signal.
    pub title: u32,
    /// Points from the subtitle.
    pub subtitle: u32,
    /// Number of tags that contain the query.
    pub matched_tags: usize,
    /// Points from tags.
    pub tags: u32,
    /// Points from the kind bonus.
    pub kind: u32,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> u32 {
        self.title
            .saturating_add(self.subtitle)
            .saturating_add(self.tags)
            .saturating_add(self.kind)
    }
}

/// The default scorer: fixed points per matching field plus a kind bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer {
    /// Point values in effect.
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Creates a scorer with custom weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Scores a document and reports each signal's contribution.
    pub fn explain(&self, document: &Document, raw_query: &str) -> ScoreBreakdown {
        let w = &self.weights;
        let query = raw_query.to_lowercase();
        let title = document.title.to_lowercase();

        let (title_match, title_points) = if title == query {
            (TitleMatch::Exact, w.exact_title)
        } else if title.starts_with(&query) {
            (TitleMatch::Prefix, w.title_prefix)
        } else if title.contains(&query) {
            (TitleMatch::Contains, w.title_contains)
        } else {
            (TitleMatch::None, 0)
        };

        let subtitle = if document.subtitle.to_lowercase().contains(&query) {
            w.subtitle_contains
        } else {
            0
        };

        let matched_tags = document
            .tags
            .iter()
            .filter(|tag| tag.to_lowercase().contains(&query))
            .count();
        let tags = u32::try_from(matched_tags)
            .unwrap_or(u32::MAX)
            .saturating_mul(w.tag_contains);

        ScoreBreakdown {
            title_match,
            title: title_points,
            subtitle,
            matched_tags,
            tags,
            kind: w.kind_bonus.for_kind(document.kind),
        }
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, document: &Document, raw_query: &str) -> u32 {
        self.explain(document, raw_query).total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> WeightedScorer {
        WeightedScorer::default()
    }

    #[test]
    fn test_exact_title() {
        let doc = Document::new(1, DocumentKind::Agent, "Lead Scorer");
        let b = scorer().explain(&doc, "lead scorer");
        assert_eq!(b.title_match, TitleMatch::Exact);
        assert_eq!(b.total(), 100 + 3);
    }

    #[test]
    fn test_prefix_title() {
        let doc = Document::new(1, DocumentKind::Client, "Acme Corp");
        assert_eq!(scorer().score(&doc, "ACME"), 50 + 5);
    }

    #[test]
    fn test_substring_title() {
        let doc = Document::new(1, DocumentKind::Page, "Lead Scoring Report");
        let b = scorer().explain(&doc, "scoring");
        assert_eq!(b.title_match, TitleMatch::Contains);
        assert_eq!(b.total(), 25 + 2);
    }

    #[test]
    fn test_subtitle_and_tags_are_additive() {
        let doc = Document::new(1, DocumentKind::Project, "Rollout")
            .with_subtitle("CRM migration for Acme")
            .with_tags(["crm", "crm-phase-2", "billing"]);
        let b = scorer().explain(&doc, "crm");
        assert_eq!(b.title, 0);
        assert_eq!(b.subtitle, 15);
        assert_eq!(b.matched_tags, 2);
        assert_eq!(b.tags, 20);
        assert_eq!(b.total(), 15 + 20 + 4);
    }

    #[test]
    fn test_no_text_match_still_gets_kind_bonus() {
        let doc = Document::new(1, DocumentKind::Client, "Globex");
        assert_eq!(scorer().score(&doc, "initech"), 5);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let doc = Document::new(1, DocumentKind::Agent, "Lead Scorer");
        let b = scorer().explain(&doc, "lead scorer ");
        assert_eq!(b.title_match, TitleMatch::None);
    }

    #[test]
    fn test_kind_bonus_ordering() {
        let bonus = KindBonus::default();
        assert!(bonus.for_kind(DocumentKind::Client) > bonus.for_kind(DocumentKind::Project));
        assert!(bonus.for_kind(DocumentKind::Project) > bonus.for_kind(DocumentKind::Agent));
        assert!(bonus.for_kind(DocumentKind::Agent) > bonus.for_kind(DocumentKind::Page));
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoreWeights {
            exact_title: 1000,
            kind_bonus: KindBonus {
                client: 0,
                project: 0,
                agent: 0,
                page: 0,
            },
            ..ScoreWeights::default()
        };
        let doc = Document::new(1, DocumentKind::Client, "Acme");
        assert_eq!(WeightedScorer::new(weights).score(&doc, "acme"), 1000);
    }

    #[test]
    fn test_exact_beats_substring_with_tags() {
        let exact = Document::new(1, DocumentKind::Page, "Reports");
        let other = Document::new(2, DocumentKind::Client, "Quarterly Reports")
            .with_subtitle("reports")
            .with_tags(["reports", "reports-q1", "reports-q2", "reports-q3", "reports-q4"]);
        let s = scorer();
        assert!(s.score(&exact, "reports") > s.score(&other, "reports"));
    }
}

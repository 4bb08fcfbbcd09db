//! Plan document model.
//!
//! The plan document has no fixed schema, only conventions: headed
//! sections, a media-plan pipe table, a "Strategy Explainer" section and a
//! creative checklist. Parsing never fails; it splits the text into named
//! sections and pulls the table rows out, and leaves judging absent
//! conventions to the extractor.

use regex::Regex;

use crate::config::ValidationConfig;

/// Classification of a section by its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Ordinary plan content; amounts here count toward the budget sum
    Body,
    /// Narrative rationale; amounts here are illustrative, not spend
    StrategyExplainer,
    /// The creative-requirements checklist
    CreativeRequirements,
}

/// One headed slice of the document.
#[derive(Debug, Clone)]
pub struct Section {
    /// Heading text as written (empty for the implicit preamble)
    pub heading: String,
    pub kind: SectionKind,
    /// Lines between this heading and the next
    pub lines: Vec<String>,
}

impl Section {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// One row of the media-plan table.
#[derive(Debug, Clone)]
pub struct PlanTableRow {
    /// Channel name as written in the table
    pub channel: String,
    /// Budget amount for the row, when the cost cell parsed
    pub amount: Option<f64>,
}

/// The parsed plan document. Immutable after parse.
#[derive(Debug, Clone)]
pub struct PlanDocument {
    pub sections: Vec<Section>,
    pub table_rows: Vec<PlanTableRow>,
    /// Whether a media-plan table header was found at all
    pub has_plan_table: bool,
}

// Header cells that identify the channel and cost columns of the
// media-plan table.
const CHANNEL_COLUMNS: [&str; 4] = ["platform", "channel", "media channel", "advertising platform"];
const COST_COLUMNS: [&str; 5] = ["cost", "budget", "spend", "total cost", "investment"];

impl PlanDocument {
    /// Parse raw plan text. Never fails.
    pub fn parse(raw: &str, config: &ValidationConfig) -> Self {
        let heading_re = Regex::new(r"^(#{1,6}\s+\S|\s*\d+\s*[.)-]\s+\S)").unwrap();

        let mut sections: Vec<Section> = vec![Section {
            heading: String::new(),
            kind: SectionKind::Body,
            lines: Vec::new(),
        }];

        for line in raw.lines() {
            let trimmed = line.trim_end();
            let looks_like_heading = heading_re.is_match(trimmed)
                || section_kind(trimmed, config) != SectionKind::Body;

            if looks_like_heading && !is_table_line(trimmed) {
                sections.push(Section {
                    heading: strip_heading_marks(trimmed),
                    kind: section_kind(trimmed, config),
                    lines: Vec::new(),
                });
            } else if let Some(current) = sections.last_mut() {
                current.lines.push(trimmed.to_string());
            }
        }

        // Drop an empty preamble so iteration starts at real content
        if sections[0].heading.is_empty() && sections[0].lines.iter().all(|l| l.trim().is_empty()) {
            sections.remove(0);
        }

        let (table_rows, has_plan_table) = parse_plan_table(raw);

        PlanDocument {
            sections,
            table_rows,
            has_plan_table,
        }
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    /// Concatenated text of all sections of the given kind.
    pub fn section_text(&self, kind: SectionKind) -> String {
        self.sections
            .iter()
            .filter(|s| s.kind == kind)
            .map(Section::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn section_kind(heading: &str, config: &ValidationConfig) -> SectionKind {
    let stripped = strip_heading_marks(heading);
    if config
        .strategy_section_patterns
        .iter()
        .any(|p| p.is_match(&stripped))
    {
        SectionKind::StrategyExplainer
    } else if config
        .creative_section_patterns
        .iter()
        .any(|p| p.is_match(&stripped))
    {
        SectionKind::CreativeRequirements
    } else {
        SectionKind::Body
    }
}

fn strip_heading_marks(line: &str) -> String {
    line.trim_start_matches('#').trim().to_string()
}

fn is_table_line(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with('|')
}

/// Parse the first pipe table whose header names a channel column and a
/// cost column. Returns the data rows and whether such a header exists.
fn parse_plan_table(raw: &str) -> (Vec<PlanTableRow>, bool) {
    let mut rows = Vec::new();
    let mut header: Option<(usize, usize)> = None; // (channel col, cost col)

    for line in raw.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            // A table ends at the first non-table line after its header
            if header.is_some() {
                break;
            }
            continue;
        }

        let cells: Vec<String> = trimmed
            .trim_matches('|')
            .split('|')
            .map(|c| c.trim().to_string())
            .collect();

        if is_separator_row(&cells) {
            continue;
        }

        match header {
            None => {
                let lowered: Vec<String> = cells.iter().map(|c| c.to_lowercase()).collect();
                let channel_col = lowered
                    .iter()
                    .position(|c| CHANNEL_COLUMNS.iter().any(|k| c.contains(k)));
                let cost_col = lowered
                    .iter()
                    .position(|c| COST_COLUMNS.iter().any(|k| c.contains(k)));
                if let (Some(ch), Some(co)) = (channel_col, cost_col) {
                    header = Some((ch, co));
                }
            }
            Some((channel_col, cost_col)) => {
                let channel = cells.get(channel_col).cloned().unwrap_or_default();
                if channel.is_empty() {
                    continue;
                }
                let amount = cells.get(cost_col).and_then(|c| parse_amount(c));
                rows.push(PlanTableRow { channel, amount });
            }
        }
    }

    let found = header.is_some();
    (rows, found)
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| matches!(ch, '-' | ':' | ' ')))
}

/// Pull a numeric amount out of a cell that may carry currency decoration.
pub fn parse_amount(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

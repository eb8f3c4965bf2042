//! Text report assembled from structured sections.
//!
//! Computation fills a [`ReportBuilder`]; nothing is printed until the
//! finished [`Report`] is rendered through [`Display`].

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::frequency::ranker::RankedEntry;
use crate::pipeline::engine::{Analysis, StageResult};

/// Title printed in the report banner.
pub const REPORT_TITLE: &str = "TEXT ANALYSIS - RUSSIAN LANGUAGE";

const BANNER_WIDTH: usize = 70;
const HEADING_WIDTH: usize = 50;
const TOP_TABLE_RULE: usize = 50;
const RARITY_TABLE_RULE: usize = 35;

/// Value of a labelled statistic.
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    /// Rendered with thousands separators.
    Count(u64),
    /// Rendered with one decimal and a percent sign.
    Percent(f64),
    Text(String),
}

impl Display for StatValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{}", format_count(*n)),
            StatValue::Percent(p) => write!(f, "{p:.1}%"),
            StatValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One block of the report.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    /// Wide title block opening or summarizing the report.
    Banner { title: String, leading_blank: bool },
    /// Numbered stage heading.
    Heading(String),
    Line(String),
    Stat { label: String, value: StatValue },
    /// Rank, word, count and percentage rows.
    TopTable(Vec<RankedEntry>),
    /// Rank, word and count rows.
    RarityTable(Vec<RankedEntry>),
    Blank,
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Section::Banner {
                title,
                leading_blank,
            } => {
                if *leading_blank {
                    writeln!(f)?;
                }
                let rule = "=".repeat(BANNER_WIDTH);
                writeln!(f, "{rule}")?;
                writeln!(f, "{title}")?;
                writeln!(f, "{rule}")
            }
            Section::Heading(title) => {
                let rule = "=".repeat(HEADING_WIDTH);
                writeln!(f)?;
                writeln!(f, "{rule}")?;
                writeln!(f, "{title}")?;
                writeln!(f, "{rule}")
            }
            Section::Line(text) => writeln!(f, "{text}"),
            Section::Stat { label, value } => writeln!(f, "{label}: {value}"),
            Section::TopTable(entries) => {
                writeln!(
                    f,
                    "{:<4} {:<20} {:<8} {:<10}",
                    "Rank", "Word", "Count", "Percentage"
                )?;
                writeln!(f, "{}", "-".repeat(TOP_TABLE_RULE))?;
                for entry in entries {
                    writeln!(
                        f,
                        "{:<4} {:<20} {:<8} {:.2}%",
                        entry.rank, entry.word, entry.count, entry.percentage
                    )?;
                }
                Ok(())
            }
            Section::RarityTable(entries) => {
                writeln!(f, "{:<4} {:<20} {:<8}", "Rank", "Word", "Count")?;
                writeln!(f, "{}", "-".repeat(RARITY_TABLE_RULE))?;
                for entry in entries {
                    writeln!(f, "{:<4} {:<20} {:<8}", entry.rank, entry.word, entry.count)?;
                }
                Ok(())
            }
            Section::Blank => writeln!(f),
        }
    }
}

/// A finished report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Report for a corpus in which no word survived cleaning.
    pub fn empty_corpus(source: Option<&Path>) -> Self {
        let mut builder = ReportBuilder::new().banner(REPORT_TITLE);
        if let Some(path) = source {
            builder = builder.line(format!("File loaded: {}", path.display()));
        }
        builder
            .heading("1. TEXT CLEANING")
            .stat("Total words after cleaning", StatValue::Count(0))
            .line("No words found after cleaning!")
            .build()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Accumulates report sections in order.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    sections: Vec<Section>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner<S: Into<String>>(mut self, title: S) -> Self {
        self.sections.push(Section::Banner {
            title: title.into(),
            leading_blank: !self.sections.is_empty(),
        });
        self
    }

    pub fn heading<S: Into<String>>(mut self, title: S) -> Self {
        self.sections.push(Section::Heading(title.into()));
        self
    }

    pub fn line<S: Into<String>>(mut self, text: S) -> Self {
        self.sections.push(Section::Line(text.into()));
        self
    }

    pub fn stat<S: Into<String>>(mut self, label: S, value: StatValue) -> Self {
        self.sections.push(Section::Stat {
            label: label.into(),
            value,
        });
        self
    }

    pub fn top_table(mut self, entries: &[RankedEntry]) -> Self {
        self.sections.push(Section::TopTable(entries.to_vec()));
        self
    }

    pub fn rarity_table(mut self, entries: &[RankedEntry]) -> Self {
        self.sections.push(Section::RarityTable(entries.to_vec()));
        self
    }

    pub fn blank(mut self) -> Self {
        self.sections.push(Section::Blank);
        self
    }

    pub fn build(self) -> Report {
        Report {
            sections: self.sections,
        }
    }

    fn rankings(self, stage: &StageResult, number: usize, suffix: &str, limit: usize) -> Self {
        let once_label = if suffix.is_empty() {
            "Words appearing only once".to_string()
        } else {
            format!("Words appearing only once {}", suffix.to_lowercase())
        };
        let suffix = if suffix.is_empty() {
            String::new()
        } else {
            format!(" {suffix}")
        };

        self.heading(format!("{number}. TOP-{limit} MOST COMMON WORDS{suffix}"))
            .top_table(&stage.top)
            .heading(format!("{number}. TOP-{limit} LEAST COMMON WORDS{suffix}"))
            .stat(
                once_label,
                StatValue::Count(stage.rarest.singletons as u64),
            )
            .rarity_table(&stage.rarest.entries)
    }
}

impl Analysis {
    /// Lay the results out as the five-stage text report.
    pub fn to_report(&self) -> Report {
        let mut builder = ReportBuilder::new().banner(REPORT_TITLE);
        if let Some(path) = &self.source {
            builder = builder.line(format!("File loaded: {}", path.display()));
        }

        builder
            .heading("1. TEXT CLEANING")
            .stat(
                "Total words after cleaning",
                StatValue::Count(self.total_words),
            )
            .heading("2. WORDCOUNT DEVELOPMENT")
            .stat(
                "Unique words",
                StatValue::Count(self.original.unique_words as u64),
            )
            .rankings(&self.original, 3, "", self.limit)
            .heading("4. STEMMING APPLICATION")
            .stat(
                "Unique words after stemming",
                StatValue::Count(self.stemmed.unique_words as u64),
            )
            .stat(
                "Vocabulary reduction",
                StatValue::Percent(self.vocabulary_reduction),
            )
            .rankings(&self.stemmed, 5, "AFTER STEMMING", self.limit)
            .banner("ANALYSIS SUMMARY")
            .stat(
                "Total words processed",
                StatValue::Count(self.total_words),
            )
            .stat(
                "Unique words (original)",
                StatValue::Count(self.original.unique_words as u64),
            )
            .stat(
                "Unique words (after stemming)",
                StatValue::Count(self.stemmed.unique_words as u64),
            )
            .stat(
                "Most common word (original)",
                StatValue::Text(most_common(&self.original)),
            )
            .stat(
                "Most common word (stemmed)",
                StatValue::Text(most_common(&self.stemmed)),
            )
            .stat(
                "Vocabulary reduction after stemming",
                StatValue::Percent(self.vocabulary_reduction),
            )
            .blank()
            .line("Analysis completed successfully!")
            .build()
    }
}

fn most_common(stage: &StageResult) -> String {
    match stage.most_common() {
        Some(entry) => format!("'{}' ({} times)", entry.word, entry.count),
        None => "'N/A' (0 times)".to_string(),
    }
}

/// Format an integer with comma thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

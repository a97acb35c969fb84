use anyhow::{Context as _, Result};
use console::style;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Result of one command, independent of how it is printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Flag(bool),
    Indices(Option<(usize, usize)>),
    Groups(Vec<Vec<String>>),
    Numbers(Vec<i64>),
    Count(usize),
    Words(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn render(outcome: &Outcome, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(outcome)),
        Format::Json => serde_json::to_string(outcome).context("Failed to serialize outcome"),
    }
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Flag(true) => style("true").green().bold().to_string(),
        Outcome::Flag(false) => style("false").red().bold().to_string(),
        Outcome::Indices(Some((i, j))) => format!("[{i}, {j}]"),
        Outcome::Indices(None) => style("no solution").yellow().to_string(),
        Outcome::Groups(groups) => groups
            .iter()
            .map(|group| format!("[{}]", group.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Numbers(numbers) => format!(
            "[{}]",
            numbers
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Outcome::Count(count) => count.to_string(),
        Outcome::Words(words) => words
            .iter()
            .map(|word| format!("{word:?}"))
            .collect::<Vec<_>>()
            .join("\n"),
        // printed raw so it can be pasted back into `decode`
        Outcome::Text(text) => text.clone(),
    }
}

use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{ClassificationResult, Rank, Resolution};

/// Counts shown in the summary box.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    /// Per rank, highest first, `Rank::Invalid` last. Zero counts are kept.
    pub by_rank: Vec<(Rank, usize)>,
    pub by_resolution: Vec<(Resolution, usize)>,
    pub discovered: usize,
}

impl Summary {
    pub fn new(results: &[ClassificationResult], discovered: usize) -> Self {
        let by_rank = Rank::RANKED
            .into_iter()
            .chain([Rank::Invalid])
            .map(|rank| (rank, results.iter().filter(|r| r.rank == rank).count()))
            .collect();

        let by_resolution = [
            Resolution::Abbreviation,
            Resolution::Discovery,
            Resolution::Text,
            Resolution::Fuzzy,
            Resolution::Unranked,
        ]
        .into_iter()
        .map(|res| (res, results.iter().filter(|r| r.resolution == res).count()))
        .collect();

        Summary {
            total: results.len(),
            by_rank,
            by_resolution,
            discovered,
        }
    }

    pub fn unranked(&self) -> usize {
        self.by_rank
            .iter()
            .find(|(rank, _)| *rank == Rank::Invalid)
            .map_or(0, |(_, n)| *n)
    }
}

/// Render a colored terminal report.
pub fn render(
    results: &[ClassificationResult],
    summary: &Summary,
    input: &Path,
    output: &Path,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let recognized = summary.total - summary.unranked();

    if quiet {
        println!(
            "Total: {}  Recognized: {}  Unranked: {}  Learned: {}",
            summary.total,
            recognized.to_string().green(),
            summary.unranked().to_string().yellow(),
            summary.discovered,
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "degree-normalizer".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Input : {}", input.display());
    println!(" Output: {}\n", output.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total descriptors  : {}", summary.total));
    println!(
        " │  {:<48} │",
        format!(
            "{}  Recognized      : {:>5}",
            "✓".green(),
            recognized
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Unranked        : {:>5}",
            "⚠".yellow(),
            summary.unranked()
        )
    );
    println!(
        " │  {:<48} │",
        format!("Abbreviations learned : {}", summary.discovered)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    render_counts("Rank", summary.by_rank.iter().map(|(r, n)| (rank_name(*r), *n)));
    println!();
    render_counts(
        "Resolved by",
        summary
            .by_resolution
            .iter()
            .map(|(res, n)| (res.to_string(), *n)),
    );
    println!();

    if verbose && !results.is_empty() {
        println!(" {} All results:\n", "[RESULTS]".cyan().bold());
        render_results(results);
        println!();
    }

    Ok(())
}

fn rank_name(rank: Rank) -> String {
    match rank {
        Rank::Invalid => "(unranked)".to_string(),
        other => other.label().to_string(),
    }
}

fn render_counts(heading: &str, rows: impl Iterator<Item = (String, usize)>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(heading).add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);

    for (name, count) in rows {
        let cell = Cell::new(count);
        table.add_row(vec![
            Cell::new(name),
            if count == 0 { cell.fg(Color::DarkGrey) } else { cell },
        ]);
    }

    println!("{}", table);
}

fn render_results(results: &[ClassificationResult]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Original").add_attribute(Attribute::Bold),
            Cell::new("Label").add_attribute(Attribute::Bold),
            Cell::new("Resolved by").add_attribute(Attribute::Bold),
        ]);

    for result in results {
        let label_color = match result.rank {
            Rank::Invalid => Color::DarkGrey,
            Rank::Postdoc | Rank::Phd | Rank::Md | Rank::Jd => Color::Green,
            Rank::Mba | Rank::Master | Rank::Bachelor => Color::Cyan,
        };
        let resolution_color = match result.resolution {
            Resolution::Abbreviation | Resolution::Text => Color::Green,
            Resolution::Discovery => Color::Magenta,
            Resolution::Fuzzy => Color::Yellow,
            Resolution::Unranked => Color::Red,
        };

        table.add_row(vec![
            Cell::new(&result.original),
            Cell::new(rank_name(result.rank)).fg(label_color),
            Cell::new(result.resolution.to_string()).fg(resolution_color),
        ]);
    }

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(original: &str, rank: Rank, resolution: Resolution) -> ClassificationResult {
        ClassificationResult {
            original: original.to_string(),
            rank,
            resolution,
        }
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            result("Ph.D. - PHD", Rank::Phd, Resolution::Abbreviation),
            result("Doctor of Medicine, MD (DOM)", Rank::Md, Resolution::Discovery),
            result("DOM", Rank::Md, Resolution::Fuzzy),
            result("some college", Rank::Invalid, Resolution::Unranked),
        ];
        let summary = Summary::new(&results, 1);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.unranked(), 1);
        assert_eq!(summary.discovered, 1);
        assert_eq!(summary.by_rank.len(), 8);
        assert_eq!(summary.by_rank[0], (Rank::Postdoc, 0));
        assert_eq!(summary.by_rank[2], (Rank::Md, 2));
        assert_eq!(summary.by_rank[7], (Rank::Invalid, 1));
        assert!(summary
            .by_resolution
            .contains(&(Resolution::Text, 0)));
        assert!(summary
            .by_resolution
            .contains(&(Resolution::Fuzzy, 1)));
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::new(&[], 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unranked(), 0);
    }
}

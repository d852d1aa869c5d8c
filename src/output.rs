/// Output formatting: terminal table and JSON.
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::ranking::{RankInfo, RankingKind};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    kind: RankingKind,
    total_players: usize,
    items: &'a [RankInfo],
}

/// Print ranks as a formatted terminal table.
pub fn print_table(title: &str, kind: RankingKind, items: &[RankInfo], total_players: usize) {
    let id_width = items
        .iter()
        .map(|r| r.player_id.len())
        .max()
        .unwrap_or(6)
        .max(6); // at least "Player"

    println!("{} ({} ranking)", title.bold(), kind);
    println!("{}", format!("{:>5} | {:<id_width$} | {:>10} | {:>14}", "Rank", "Player", "Score", "Timestamp").bold());
    println!("------|-{}-|------------|---------------", "-".repeat(id_width));

    for r in items {
        let rank = format!("{:>5}", r.rank);
        let rank = if r.rank == 1 { rank.yellow().bold() } else { rank.normal() };
        println!(
            "{} | {:<id_width$} | {:>10} | {:>14}",
            rank, r.player_id, r.score, r.timestamp,
        );
    }

    println!("\n{} shown, {} players ranked", items.len(), total_players);
}

/// Print ranks as JSON.
pub fn print_json(kind: RankingKind, items: &[RankInfo], total_players: usize) -> Result<()> {
    let output = JsonOutput {
        kind,
        total_players,
        items,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

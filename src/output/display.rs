//! Display functions for command results

use super::formatters::{ratio_bar, witness_to_string};
use crate::commands::{CheckResult, ConvertResult, FindResult, MadisonEntry};
use colored::Colorize;

fn print_entry(label: &str, entry: Option<&MadisonEntry>) {
    match entry {
        Some(entry) => println!(
            "   {label:<16} {} {}",
            entry.word.bright_yellow().bold(),
            format!(
                "({}, {} words)",
                witness_to_string(&entry.decomposition),
                entry.decomposition.word_count()
            )
            .bright_black()
        ),
        None => println!("   {label:<16} {}", "-".bright_black()),
    }
}

/// Print the result of a madison search
pub fn print_find_result(result: &FindResult, show: usize) {
    let stats = &result.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MADISON WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Total words:     {}", stats.total_words);
    println!(
        "   Madison words:   {}",
        format!("{}", stats.madison_words).green().bold()
    );
    println!(
        "   Madison ratio:   [{}] {}",
        ratio_bar(stats.ratio, 30).green(),
        format!("{:.3}", stats.ratio).bright_yellow()
    );
    println!("   Time taken:      {:.2}s", result.duration.as_secs_f64());

    println!("\n📏 {}", "Extremes:".bright_cyan().bold());
    print_entry("Shortest:", stats.shortest.as_ref());
    print_entry("Longest:", stats.longest.as_ref());
    print_entry("Highest density:", stats.densest.as_ref());
    match &stats.most_frequent {
        Some((entry, count)) => println!(
            "   {:<16} {} {}",
            "Most frequent:",
            entry.word.bright_yellow().bold(),
            format!("({count} occurrences)").bright_black()
        ),
        None => println!("   {:<16} {}", "Most frequent:", "-".bright_black()),
    }

    if !result.sample.is_empty() {
        println!("\n🎲 {}", "Random sample:".bright_cyan().bold());
        for entry in &result.sample {
            println!(
                "   {:<20} {}",
                entry.word,
                witness_to_string(&entry.decomposition).green()
            );
        }
    }

    if show > 0 {
        println!("\n📜 {}", "Madison words:".bright_cyan().bold());
        for (word, decomposition) in result.madison.iter().take(show) {
            println!("   {word:<20} {}", witness_to_string(decomposition).green());
        }
        if result.madison.len() > show {
            println!(
                "   {}",
                format!("... and {} more", result.madison.len() - show).bright_black()
            );
        }
    }
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let membership = if result.in_vocabulary {
        "yes".green()
    } else {
        "no".yellow()
    };
    println!(
        "  In vocabulary: {membership} ({} words loaded)",
        result.vocabulary_size
    );

    println!();
    if result.decomposition.is_madison() {
        println!(
            "{}",
            format!(
                "✅ Madison: {} ({} words)",
                witness_to_string(&result.decomposition),
                result.decomposition.word_count()
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "❌ Not a madison word".red().bold());
    }
}

/// Print the result of converting a corpus
pub fn print_convert_result(result: &ConvertResult) {
    println!(
        "{} {} → {}",
        "✅ Converted".green().bold(),
        result.input.display(),
        result.output.display()
    );
    println!("   Tokens read:   {}", result.total_tokens);
    println!("   Unique words:  {}", result.unique_words);
    println!("   Time taken:    {:.2}s", result.duration.as_secs_f64());
}

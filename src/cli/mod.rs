//! Command-line interface for libris.
//!
//! Provides a guided walkthrough of the borrow/return workflow and a way to
//! inspect the resolved loan policy.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::adapters::{LegacySearchAdapter, LegacySearchSystem, SearchBackend};
use crate::config::{self, LoanPolicy, ResolvedConfig};
use crate::core::{LoanCommand, LoanReview};
use crate::domain::{BookFactory, LabeledBook, Loan, Member, TitleDisplay};
use crate::library::{by_author, by_title, Catalog, SearchStrategy};

/// libris - library catalog simulation
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log lending decisions at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through borrowing and returning a book
    Demo {
        /// Book title
        #[arg(long, default_value = "1984")]
        title: String,

        /// Book author
        #[arg(long, default_value = "George Orwell")]
        author: String,

        /// Book ISBN
        #[arg(long, default_value = "123456789")]
        isbn: String,

        /// Member name
        #[arg(long, default_value = "Alice")]
        member: String,

        /// Member ID
        #[arg(long, default_value = "001")]
        member_id: String,

        /// Label shown next to the title
        #[arg(long, default_value = "New Arrival")]
        label: String,

        /// Loan length in days (overrides the configured policy)
        #[arg(long, env = "LIBRIS_LOAN_DAYS")]
        loan_days: Option<i64>,

        /// Print loans as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Default log filter when LIBRIS_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Demo {
                title,
                author,
                isbn,
                member,
                member_id,
                label,
                loan_days,
                json,
            } => {
                let policy = with_loan_days(config::loan_policy()?, loan_days)?;
                run_demo(
                    policy,
                    &title,
                    &author,
                    &isbn,
                    Member::new(member, member_id),
                    &label,
                    json,
                )
            }
            Commands::Config { json } => {
                println!("{}", render_config(config::config()?, json)?);
                Ok(())
            }
        }
    }
}

/// Print a loan either as JSON or as a short summary line
fn print_loan(heading: &str, loan: &Loan, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(loan).context("Failed to serialize loan")?;
        println!("{}", rendered);
    } else {
        println!(
            "{}: {} by member {} (borrowed {}, due {})",
            heading,
            loan.title,
            loan.member,
            loan.borrowed_at.format("%Y-%m-%d"),
            loan.due_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

/// Apply a command-line loan period on top of the configured policy
fn with_loan_days(mut policy: LoanPolicy, loan_days: Option<i64>) -> Result<LoanPolicy> {
    if let Some(days) = loan_days {
        if days <= 0 {
            anyhow::bail!("Loan period must be at least one day, got {}", days);
        }
        policy.loan_period_days = days;
    }
    Ok(policy)
}

/// Run the borrow/return walkthrough
fn run_demo(
    policy: LoanPolicy,
    title: &str,
    author: &str,
    isbn: &str,
    member: Member,
    label: &str,
    json: bool,
) -> Result<()> {
    let mut catalog = Catalog::with_policy(policy);

    let book = BookFactory::new().create_book(title, author, isbn);
    let book_id = book.id;
    let member_id = member.id.clone();

    catalog.add_book(book);
    catalog.register_member(member.clone());
    catalog.notifier_mut().subscribe(Box::new(member));

    // Borrow
    let borrow = LoanCommand::Borrow {
        book: book_id,
        member: member_id.clone(),
    };
    let loan = borrow.execute(&mut catalog)?;
    print_loan("Borrowed", &loan, json)?;

    // A second borrow must be refused while the book is out
    match borrow.execute(&mut catalog) {
        Ok(_) => anyhow::bail!("Book was lent twice"),
        Err(e) => println!("Second borrow refused: {}", e),
    }

    // Return
    let returned = LoanCommand::Return {
        book: book_id,
        member: member_id,
    }
    .execute(&mut catalog)?;
    print_loan("Returned", &returned, json)?;

    let shelved = catalog
        .book(&book_id)
        .context("Book disappeared from catalog")?;
    println!("{} is now {}", shelved.title, shelved.state());
    println!("{}", LabeledBook::new(shelved, label).display_title());

    // Search
    let strategies: [(&str, &str, SearchStrategy); 2] =
        [("title", title, by_title as SearchStrategy), ("author", author, by_author)];
    for (name, keyword, strategy) in strategies {
        let hits = catalog.search(strategy, keyword);
        println!("Search by {} '{}': {} result(s)", name, keyword, hits.len());
    }

    let legacy = LegacySearchSystem::new(catalog.books().map(|b| b.title.clone()));
    let adapter = LegacySearchAdapter::new(&legacy);
    println!(
        "Search via {} backend '{}': {:?}",
        adapter.name(),
        title,
        adapter.search_titles(title)
    );

    for book in &catalog {
        println!("Shelf: {} ({}) [{}]", book.title, book.author, book.state());
    }

    // Review a loan that is long past due
    let now = Utc::now();
    let mut late = Loan::new(
        shelved,
        returned.member.clone(),
        now - Duration::days(30),
        now - Duration::days(14),
    );
    let review = LoanReview::default();
    let open_findings = review.review(&late, now);
    late.close(now);
    let closed_findings = review.review(&late, now);

    if closed_findings.is_empty() {
        warn!("Late return was not flagged");
    }
    for finding in open_findings.iter().chain(&closed_findings) {
        println!("Review: {}", finding);
    }

    info!(loans = catalog.loans().len(), "Demo finished");
    Ok(())
}

/// Render resolved configuration as text or JSON
fn render_config(config: &ResolvedConfig, json: bool) -> Result<String> {
    if json {
        let value = serde_json::json!({
            "config_file": config.config_file,
            "policy": config.policy,
        });
        return serde_json::to_string_pretty(&value).context("Failed to serialize configuration");
    }

    let config_file = match &config.config_file {
        Some(path) => path.display().to_string(),
        None => "(none, using defaults)".to_string(),
    };

    let lines = [
        "libris configuration".to_string(),
        "====================".to_string(),
        String::new(),
        format!("Config file: {}", config_file),
        format!("Loan period:    {} days", config.policy.loan_period_days),
        format!(
            "Strict returns: {}",
            if config.policy.strict_returns { "yes" } else { "no" }
        ),
    ];
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_config() -> ResolvedConfig {
        ResolvedConfig {
            policy: LoanPolicy {
                loan_period_days: 21,
                strict_returns: true,
            },
            config_file: Some(PathBuf::from("/test/.libris/config.yaml")),
        }
    }

    #[test]
    fn test_verbose_flag_sets_log_level() {
        let cli = Cli::try_parse_from(["libris", "config"]).unwrap();
        assert_eq!(cli.log_level(), "info");

        let cli = Cli::try_parse_from(["libris", "config", "--verbose"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_loan_days_flag() {
        let cli = Cli::try_parse_from(["libris", "demo", "--loan-days", "7"]).unwrap();
        match cli.command {
            Commands::Demo { loan_days, .. } => assert_eq!(loan_days, Some(7)),
            other => panic!("Expected demo command, got {:?}", other),
        }
    }

    #[test]
    fn test_with_loan_days() {
        let base = LoanPolicy::default();

        assert_eq!(with_loan_days(base, None).unwrap(), base);
        assert_eq!(with_loan_days(base, Some(7)).unwrap().loan_period_days, 7);
        assert!(with_loan_days(base, Some(0)).is_err());
    }

    #[test]
    fn test_render_config_json() {
        let rendered = render_config(&sample_config(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["policy"]["loan_period_days"], 21);
        assert_eq!(value["policy"]["strict_returns"], true);
        assert_eq!(value["config_file"], "/test/.libris/config.yaml");

        let policy: LoanPolicy = serde_json::from_value(value["policy"].clone()).unwrap();
        assert_eq!(policy, sample_config().policy);
    }

    #[test]
    fn test_render_config_text() {
        let rendered = render_config(&sample_config(), false).unwrap();

        assert!(rendered.contains("Loan period:    21 days"));
        assert!(rendered.contains("Strict returns: yes"));
    }
}

//! Gabarito CLI
//!
//! Inspect the roster and class sheets behind the answer-key forms.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gabarito::{
    error::{AppError, Result},
    models::{AnswerKey, Config, UserRecord},
    pipeline,
    services::{
        HttpSheetSource, MemoryCache, SheetService, SheetSource, duplicate_masps,
        extract_sheet_names,
    },
    utils::{csv::parse_rows, log as report},
};
use serde::Serialize;

/// Gabarito - answer-key sheet reader
#[derive(Parser, Debug)]
#[command(name = "gabarito", version, about = "Answer-key spreadsheet reader")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "gabarito.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print results as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the teachers on the roster sheet
    Users,

    /// Look up one teacher by MASP
    Login {
        /// Staff identifier
        masp: String,
    },

    /// Show the class catalog grouped by unit and category
    Years,

    /// Show the subject blocks of one class sheet
    Subjects {
        /// Class identifier, e.g. 6-ANO
        year: String,
    },

    /// Show the subjects of every class
    Survey,

    /// Show the headers and first rows of any sheet
    Probe {
        /// Sheet name
        sheet: String,

        /// Number of rows to show
        #[arg(long, default_value_t = 5)]
        rows: usize,
    },

    /// List class sheet names found on the document's edit page
    Discover,

    /// Build an answer key and print the submission
    Key {
        /// Staff identifier of the submitting teacher
        #[arg(long)]
        masp: String,

        /// Class identifier
        #[arg(long)]
        year: String,

        /// Subject name as listed by `subjects`
        #[arg(long)]
        subject: String,

        /// One letter (A-D) per question, in question order
        #[arg(long)]
        answers: String,
    },

    /// Validate configuration and the class catalog
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
    report::init(level);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);

    // Validation must run even when the config cannot build a client.
    if let Command::Validate = cli.command {
        return pipeline::run_validate(&config);
    }

    let source = Arc::new(HttpSheetSource::from_config(&config)?);
    let cache = Arc::new(MemoryCache::new());
    let service = SheetService::new(source.clone(), cache, &config)?;

    match cli.command {
        Command::Users => {
            let users = service.get_users().await;
            if cli.json {
                return print_json(&users);
            }

            report::header(&format!("Roster ({})", config.sheets.login_sheet));
            for user in &users {
                report::sub_item(&format!("{:<12} {}", user.masp, user.name));
            }

            let duplicates = duplicate_masps(&users);
            for (masp, count) in &duplicates {
                report::warn(&format!("MASP {masp} is listed {count} times"));
            }
            report::summary(
                "Roster",
                &[
                    ("Teachers", users.len().to_string()),
                    ("Duplicated MASPs", duplicates.len().to_string()),
                ],
            );
        }

        Command::Login { masp } => match service.find_user(&masp).await {
            Some(user) if cli.json => print_json(&user)?,
            Some(user) => report::success(&format!("✓ {} ({})", user.name, user.masp)),
            None => {
                report::error(&format!("MASP {} not found", masp.trim()));
                return Err(AppError::validation("MASP not found"));
            }
        },

        Command::Years => {
            let groups = service.catalog().groups();
            if cli.json {
                return print_json(&groups);
            }

            for group in &groups {
                report::header(&format!("Unidade {}", group.unit));
                for category in &group.categories {
                    report::info(category.category.display_name());
                    for year in &category.years {
                        report::sub_item(year);
                    }
                }
            }
        }

        Command::Subjects { year } => {
            let subjects = service.get_subjects(&year).await;
            if cli.json {
                return print_json(&subjects);
            }

            report::header(&format!("Subjects of {year}"));
            for subject in &subjects {
                report::sub_item(&subject.label());
            }
            report::summary(
                &year,
                &[
                    ("Subjects", subjects.len().to_string()),
                    (
                        "Questions",
                        subjects
                            .iter()
                            .map(|s| s.question_count)
                            .sum::<usize>()
                            .to_string(),
                    ),
                ],
            );
        }

        Command::Survey => {
            let survey = pipeline::run_survey(&service, config.http.max_concurrent).await;
            if cli.json {
                return print_json(&survey);
            }

            for class in &survey {
                report::header(&class.year);
                if class.subjects.is_empty() {
                    report::warn(&format!("No subjects found for {}", class.year));
                }
                for subject in &class.subjects {
                    report::sub_item(&subject.label());
                }
            }
            report::summary(
                "Survey",
                &[
                    ("Classes", survey.len().to_string()),
                    (
                        "Empty classes",
                        survey
                            .iter()
                            .filter(|c| c.subjects.is_empty())
                            .count()
                            .to_string(),
                    ),
                    (
                        "Questions",
                        survey
                            .iter()
                            .map(|c| c.question_total())
                            .sum::<usize>()
                            .to_string(),
                    ),
                ],
            );
        }

        Command::Probe { sheet, rows } => {
            let body = source.fetch_csv(&sheet).await?;
            let parsed = parse_rows(&body)?;
            let shown: Vec<_> = parsed.iter().take(rows).collect();
            if cli.json {
                return print_json(&shown);
            }

            report::header(&format!("Sheet {sheet}"));
            let headers = parsed.first().map(|row| row.headers().join(" | "));
            report::info(&format!(
                "Headers: {}",
                headers.unwrap_or_else(|| "(no rows)".to_string())
            ));
            for row in shown {
                let cells: Vec<String> = row.iter().map(|(k, v)| format!("{k}={v}")).collect();
                report::sub_item(&cells.join(", "));
            }
            report::summary("Probe", &[("Rows", parsed.len().to_string())]);
        }

        Command::Discover => {
            let html = source.fetch_document_html().await?;
            let names = extract_sheet_names(&html)?;
            if cli.json {
                return print_json(&names);
            }

            report::header("Class sheets on the document");
            for name in &names {
                let known = if service.catalog().contains(name) {
                    ""
                } else {
                    "  (not in catalog)"
                };
                report::sub_item(&format!("{name}{known}"));
            }
        }

        Command::Key {
            masp,
            year,
            subject,
            answers,
        } => {
            let user: UserRecord = service
                .find_user(&masp)
                .await
                .ok_or_else(|| AppError::validation(format!("MASP {} not found", masp.trim())))?;

            let subject = service
                .get_subjects(&year)
                .await
                .into_iter()
                .find(|s| s.name == subject.trim())
                .ok_or_else(|| {
                    AppError::validation(format!("Subject '{subject}' not found in {year}"))
                })?;

            let key = AnswerKey::from_compact(subject, &answers)?;
            if !key.is_complete() {
                report::warn(&format!("Unanswered questions: {:?}", key.missing()));
            }
            let submission = key.submit(&user, &year)?;
            print_json(&submission)?;
        }

        Command::Validate => {}
    }

    Ok(())
}

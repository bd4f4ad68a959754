use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use cbc_pathway_engine::analysis::{analyze_performance, build_history, latest_assessment};
use cbc_pathway_engine::competency::{analyze_skill_gaps, DEFAULT_TARGET_LEVEL};
use cbc_pathway_engine::config::{EngineConfig, MissingSubjectPolicy};
use cbc_pathway_engine::ingest;
use cbc_pathway_engine::models::AssessmentRecord;
use cbc_pathway_engine::pathway::recommend_for_assessment;
use cbc_pathway_engine::report;
use cbc_pathway_engine::subject::format_subject_name;
use cbc_pathway_engine::EngineError;

#[derive(Parser)]
#[command(name = "cbc-pathway")]
#[command(about = "CBC pathway affinity and adaptive learning recommendations", long_about = None)]
struct Cli {
    /// How weighted subjects with no score affect pathway scores
    #[arg(
        long,
        global = true,
        env = "CBC_MISSING_SUBJECTS",
        value_enum,
        default_value_t = MissingSubjectPolicy::CountAsZero
    )]
    missing_subjects: MissingSubjectPolicy,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("scope")
        .args(["student", "name"])
        .multiple(false)
))]
struct StudentArgs {
    /// Long-format assessment CSV
    #[arg(long)]
    csv: PathBuf,
    #[arg(long)]
    student: Option<Uuid>,
    #[arg(long)]
    name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute pathway affinity from the student's latest assessment
    Pathway {
        #[command(flatten)]
        scope: StudentArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Tiered recommendations and learning velocity across terms
    Analyze {
        #[command(flatten)]
        scope: StudentArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        scope: StudentArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Skill gaps between two competency levels
    Gaps {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        current: u8,
        #[arg(long, default_value_t = DEFAULT_TARGET_LEVEL)]
        target: u8,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_student(scope: &StudentArgs) -> anyhow::Result<(Vec<AssessmentRecord>, Uuid)> {
    let records = ingest::load_csv(&scope.csv)
        .with_context(|| format!("failed to load assessments from {}", scope.csv.display()))?;
    let student_id = ingest::find_student(&records, scope.student, scope.name.as_deref())
        .context(
            "no matching student in the assessment file \
             (pass --student or --name when it holds several students)",
        )?;
    Ok((records, student_id))
}

fn latest_record(
    records: &[AssessmentRecord],
    student_id: Uuid,
) -> anyhow::Result<&AssessmentRecord> {
    latest_assessment(records, student_id)
        .ok_or_else(|| EngineError::UnknownStudent(student_id).into())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    let config = EngineConfig::default().with_missing_subjects(cli.missing_subjects);

    match cli.command {
        Commands::Pathway { scope, format } => {
            let (records, student_id) = load_student(&scope)?;
            let latest = latest_record(&records, student_id)?;
            let Some(rec) = recommend_for_assessment(latest.grade, &latest.scores, &config) else {
                println!(
                    "{} is in Grade {}; pathway guidance is only computed for junior school.",
                    latest.student_name, latest.grade
                );
                return Ok(());
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rec)?),
                OutputFormat::Text => {
                    println!(
                        "{}: {} ({} confidence)",
                        latest.student_name, rec.top_pathway, rec.confidence
                    );
                    println!(
                        "STEM {} / Arts & Sports {} / Social Sciences {}",
                        rec.stem_score, rec.arts_sports_score, rec.social_sciences_score
                    );
                    println!();
                    println!("{}", rec.guidance_message);
                }
            }
        }
        Commands::Analyze { scope, format } => {
            let (records, student_id) = load_student(&scope)?;
            let latest = latest_record(&records, student_id)?;
            let history = build_history(&records, student_id);
            let analysis = analyze_performance(&latest.scores, Some(&history));

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                OutputFormat::Text => {
                    println!(
                        "{}: {} overall, {} needing support, {} excelling, velocity {:+.2}",
                        latest.student_name,
                        analysis.overall_tier.label(),
                        analysis.subjects_needing_support,
                        analysis.subjects_excelling,
                        analysis.average_velocity
                    );
                    for rec in &analysis.recommendations {
                        println!(
                            "- {} level {} -> {} (target {})",
                            rec.subject, rec.current_level, rec.tier_label, rec.target_level
                        );
                    }
                    for velocity in &analysis.velocities {
                        println!(
                            "- {} {:+.2}/term: {}",
                            format_subject_name(&velocity.subject),
                            velocity.velocity,
                            velocity.prediction
                        );
                    }
                }
            }
        }
        Commands::Report { scope, out } => {
            let (records, student_id) = load_student(&scope)?;
            let latest = latest_record(&records, student_id)?;
            let history = build_history(&records, student_id);
            let pathway = recommend_for_assessment(latest.grade, &latest.scores, &config);
            let analysis = analyze_performance(&latest.scores, Some(&history));
            let report = report::build_report(latest, pathway.as_ref(), &analysis);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Gaps {
            subject,
            current,
            target,
        } => {
            let gaps = analyze_skill_gaps(&subject, current, target);
            println!(
                "{}: level {} -> {} ({})",
                format_subject_name(&subject),
                current,
                target,
                gaps.time_estimate
            );
            for gap in &gaps.gaps {
                println!("  {gap}");
            }
            for step in &gaps.next_steps {
                println!("- {step}");
            }
        }
    }

    Ok(())
}

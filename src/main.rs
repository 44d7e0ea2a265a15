//! Insurance Advisor CLI
//!
//! Command-line front end for plan search, risk assessment, and comparison

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use insurance_advisor::{
    assistant::ChatSession,
    catalog::{pool_stats, CommunityPool},
    compare::{format_inr, Comparison, DocumentExporter, FileExporter},
    risk::{QuestionKind, Questionnaire, StepOutcome},
    CategorySelector, PlanSearch, SessionConfig, SortKey, Translator,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "insurance-advisor",
    about = "Search insurance plans, assess lifestyle risk, and compare policies",
    version
)]
struct Cli {
    /// Session config JSON (profile, criteria, locale, catalog path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the display locale (e.g. en, hi)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List plans matching the profile and filters
    Search(SearchArgs),
    /// Answer the lifestyle questionnaire and print the risk score
    Assess(AssessArgs),
    /// Compare up to three plans side by side
    Compare(CompareArgs),
    /// Show community insurance pools
    Pools,
    /// Look up a display string
    Translate {
        key: String,
    },
    /// Ask the assistant a question
    Chat {
        message: String,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// CSV catalog (defaults to the config's catalog or the built-in plans)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// all, health, life, vehicle, or home
    #[arg(long, default_value = "all")]
    category: CategorySelector,
    /// Case-insensitive match on plan or provider name
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    max_premium: Option<f64>,
    #[arg(long)]
    min_coverage: Option<f64>,
    /// recommended, premium-low, premium-high, coverage-high, or rating
    #[arg(long)]
    sort: Option<SortKey>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// 18-25, 26-35, 36-45, 46-55, or 55+
    #[arg(long)]
    age: String,
    /// sedentary, moderately active, or very active
    #[arg(long)]
    lifestyle: String,
    /// never, occasionally, or regularly
    #[arg(long)]
    smoking: String,
    /// diabetes, heart disease, hypertension, or none (repeatable)
    #[arg(long, default_values_t = vec!["none".to_string()])]
    medical: Vec<String>,
    /// low risk, medium risk, or high risk
    #[arg(long)]
    occupation: String,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Plan ids (first three are used)
    #[arg(required = true)]
    ids: Vec<u32>,
    /// Write the comparison report into this directory
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    let translator = config.translator();

    match cli.command {
        Command::Search(args) => run_search(config, &translator, args),
        Command::Assess(args) => run_assess(&translator, args),
        Command::Compare(args) => run_compare(&config, &translator, args),
        Command::Pools => {
            run_pools(&translator);
            Ok(())
        }
        Command::Translate { key } => {
            println!("{}", translator.translate(&key));
            Ok(())
        }
        Command::Chat { message } => run_chat(&config, translator, &message),
    }
}

fn run_search(mut config: SessionConfig, t: &Translator, args: SearchArgs) -> Result<()> {
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }
    let catalog = config.catalog().context("loading plan catalog")?;

    let mut criteria = config.criteria.clone();
    if let Some(max_premium) = args.max_premium {
        criteria.max_premium = max_premium;
    }
    if let Some(min_coverage) = args.min_coverage {
        criteria.min_coverage = min_coverage;
    }
    if let Some(sort) = args.sort {
        criteria.sort_by = sort;
    }

    let mut search = PlanSearch::with_criteria(catalog, config.profile.clone(), criteria);
    search.set_category(args.category);
    search.set_query(args.query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&search.results())?);
        return Ok(());
    }

    let profile = search.profile();
    println!(
        "{}: {} {} | {} {} | {}/mo | {}",
        t.translate("matchingYourProfile"),
        profile.age,
        t.translate("yearsOld"),
        profile.dependents,
        t.translate("dependents"),
        format_inr(profile.income),
        profile.occupation,
    );
    println!(
        "{} | {} {} | {} {} | {} {}\n",
        t.translate(search.category().label_key()),
        t.translate("maxPremium"),
        format_inr(search.criteria().max_premium),
        t.translate("minCoverage"),
        format_inr(search.criteria().min_coverage),
        t.translate("sortBy"),
        t.translate(search.criteria().sort_by.label_key()),
    );

    if search.is_empty() {
        println!("{}", t.translate("noPlansFound"));
        println!("{}", t.translate("tryAdjustingFilters"));
        return Ok(());
    }

    println!("{} {}", search.len(), t.translate("plansFound"));
    println!("{:>3} {:<32} {:<15} {:<8} {:>12} {:>14} {:>6}",
        "ID", "Plan", "Provider", "Type", "Premium", "Coverage", "Rating");
    println!("{}", "-".repeat(96));
    for plan in search.results() {
        println!("{:>3} {:<32} {:<15} {:<8} {:>12} {:>14} {:>6.1}{}",
            plan.id,
            plan.name,
            plan.provider,
            plan.category.as_str(),
            format_inr(plan.premium),
            format_inr(plan.coverage),
            plan.rating,
            if plan.recommended { "  *" } else { "" },
        );
    }
    Ok(())
}

fn run_assess(t: &Translator, args: AssessArgs) -> Result<()> {
    let mut quiz = Questionnaire::new();
    let single_answers = [
        Some(args.age.as_str()),
        Some(args.lifestyle.as_str()),
        Some(args.smoking.as_str()),
        None,
        Some(args.occupation.as_str()),
    ];

    let mut assessment = None;
    for answer in single_answers {
        let question = quiz.current();
        match (question.kind, answer) {
            (QuestionKind::Single, Some(label)) => {
                if !quiz.select(label) {
                    bail!("'{}' is not a valid answer for '{}'", label, question.id);
                }
            }
            _ => {
                for label in &args.medical {
                    if !quiz.toggle(label) {
                        bail!("'{}' is not a valid answer for '{}'", label, question.id);
                    }
                }
            }
        }

        match quiz.next() {
            StepOutcome::Advanced(_) => {}
            StepOutcome::Blocked => bail!("question '{}' needs an answer", question.id),
            StepOutcome::Completed(result) => assessment = Some(result),
        }
    }
    let Some(assessment) = assessment else {
        bail!("questionnaire did not complete");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("{}", t.translate("riskAssessment"));
    println!("{}\n", t.translate("basedOnYourResponses"));
    println!("  {}/100  {}", assessment.score.value(), t.translate(assessment.tier.label_key()));
    for (factor, points) in assessment.breakdown.factors() {
        println!("    {:<10} {:>3}", factor.as_str(), points);
    }
    println!("\n{}:", t.translate("recommendations"));
    println!("  {}", t.translate(assessment.tier.recommendation_key()));
    Ok(())
}

fn run_compare(config: &SessionConfig, t: &Translator, args: CompareArgs) -> Result<()> {
    let catalog = config.catalog().context("loading plan catalog")?;
    let comparison = Comparison::select(&catalog, &args.ids);
    if comparison.is_empty() {
        bail!("none of the requested plans are in the catalog");
    }

    let report = comparison.render_report(t);
    print!("{}", report);

    if let Some(dir) = args.export {
        let handle = FileExporter::comparison_report(&dir)
            .export_document(&report)
            .context("exporting comparison report")?;
        println!("\n{} -> {}", t.translate("exportPDF"), handle.path.display());
    }
    Ok(())
}

fn run_pools(t: &Translator) {
    let pools = CommunityPool::builtin();
    println!("{}", t.translate("communityPools"));
    println!("{}\n", t.translate("communityPoolsDescription"));

    for pool in &pools {
        println!("{} ({}) - {} {}",
            t.translate(pool.name_key), pool.segment, pool.members, t.translate("members"));
        println!("  {} -> {}  ({}% {})",
            format_inr(pool.original_premium),
            format_inr(pool.premium),
            pool.savings_percent(),
            t.translate("savings"));
        println!("  {}: {}", t.translate("coverage"), format_inr(pool.coverage));
        for key in &pool.benefit_keys {
            println!("    - {}", t.translate(key));
        }
        println!();
    }

    let stats = pool_stats(&pools);
    println!("{}: {}", t.translate("totalMembers"), stats.total_members);
    println!("{}: {:.0}%", t.translate("avgDiscount"), stats.average_savings_percent);
    println!("{}: {}", t.translate("avgSavingsPerYear"), format_inr(stats.average_annual_saving));
}

fn run_chat(config: &SessionConfig, translator: Translator, message: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("starting runtime")?;

    runtime.block_on(async {
        let mut chat = ChatSession::new(translator, config.assistant.clone());
        if !chat.send(message)? {
            bail!("message is empty");
        }
        chat.await_reply().await?;
        for msg in chat.messages() {
            println!("[{:?}] {}", msg.sender, msg.text);
        }
        Ok::<_, anyhow::Error>(())
    })
}

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use nutri_graph::Result;
use nutri_graph::error::util::safe_read_to_string;
use nutri_graph::{
    AnalysisReport, CatalogConfig, DeficiencyEngine, DemographicProfile, EngineConfig, FoodPlan,
    NutrientRecommendation, ReferenceCatalogs,
};

#[derive(Parser, Debug)]
#[command(name = "nutri-graph")]
#[command(version)]
#[command(about = "Resolve nutrient deficiencies and their dependencies from lab readings", long_about = None)]
struct Cli {
    /// Directory holding the reference tables; falls back to NUTRI_CATALOG_DIR
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// Text file with one report line per reading, e.g. `Hemoglobin 9.0 g/dL`
    #[arg(long)]
    readings: Option<PathBuf>,

    /// Age in years, for RDA lookups
    #[arg(long, requires_all = ["gender", "activity_level"])]
    age: Option<u32>,

    #[arg(long, requires = "age")]
    gender: Option<String>,

    #[arg(long, requires = "age")]
    activity_level: Option<String>,

    /// Body weight in kilograms
    #[arg(long, requires = "age")]
    weight: Option<f64>,

    /// Engine configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Print causes, effects and things to avoid for a parameter
    #[arg(long)]
    details: Option<String>,

    /// Print the dependency graph as Graphviz DOT
    #[arg(long)]
    dot: bool,

    /// Print the dependency graph rooted at one nutrient as Graphviz DOT
    #[arg(long)]
    root: Option<String>,

    /// Selected foods, comma separated, laid out as a day-by-day plan
    #[arg(long, value_delimiter = ',')]
    plan: Vec<String>,
}

impl Cli {
    fn catalog_config(&self) -> Result<CatalogConfig> {
        match &self.catalog_dir {
            Some(dir) => Ok(CatalogConfig::new(dir)),
            None => CatalogConfig::from_env(),
        }
    }

    fn profile(&self) -> Option<DemographicProfile> {
        let (Some(age), Some(gender), Some(activity)) =
            (self.age, self.gender.as_deref(), self.activity_level.as_deref())
        else {
            return None;
        };
        let profile = DemographicProfile::new(age, gender, activity);
        Some(match self.weight {
            Some(weight) => profile.with_weight(weight),
            None => profile,
        })
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = Instant::now();

    let engine_config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let catalogs = ReferenceCatalogs::load(&cli.catalog_config()?)?;
    let engine = DeficiencyEngine::new(&catalogs, &engine_config);
    info!("Catalogs ready in {:?}", start.elapsed());

    if let Some(name) = &cli.details {
        let details = engine.details(name);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&details)?);
        } else {
            println!("Causes: {}", details.causes.join("; "));
            println!("Effects: {}", details.effects.join("; "));
            println!("Avoid: {}", details.avoids.join("; "));
        }
    }

    if let Some(root) = &cli.root {
        print!("{}", engine.graph_for_root(root).to_dot());
    }

    let plan = FoodPlan::from_selection(cli.plan.iter().cloned());

    let Some(readings_path) = &cli.readings else {
        if !plan.is_empty() {
            print_plan(&plan);
        }
        return Ok(());
    };
    let text = safe_read_to_string(readings_path, "reading report lines")?;
    let report = engine.analyze_lines(text.lines());

    let profile = cli.profile();
    let recommendations = profile
        .as_ref()
        .map(|p| engine.recommend(&report.deficiencies, p))
        .unwrap_or_default();

    if cli.json {
        let output = serde_json::json!({
            "report": report,
            "profile": profile,
            "recommendations": recommendations,
            "food_plan": plan,
        });
        let rendered =
            serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
        println!("{rendered}");
    } else if cli.dot {
        print!("{}", report.graph.to_dot());
    } else {
        print_report(&report, profile.as_ref(), &recommendations);
        if !plan.is_empty() {
            print_plan(&plan);
        }
    }

    info!("Done in {:?}", start.elapsed());
    Ok(())
}

fn print_report(
    report: &AnalysisReport,
    profile: Option<&DemographicProfile>,
    recommendations: &[NutrientRecommendation],
) {
    println!("Assessments:");
    for a in &report.assessments {
        println!(
            "  {:<24} {:>10} {:<8} ({})",
            a.parameter,
            a.value,
            a.status.as_str(),
            a.normal_range
        );
    }
    println!();
    println!("{}", report.narrative);

    if let Some(profile) = profile {
        println!();
        println!(
            "Recommendations (age {}, {}, {}):",
            profile.age, profile.gender, profile.activity_level
        );
        for rec in recommendations {
            println!("  {}: RDA {}; foods: {}", rec.nutrient, rec.rda, rec.foods_summary());
        }
    }
}

fn print_plan(plan: &FoodPlan) {
    println!();
    println!("Food plan ({} days):", plan.len());
    for day in plan.days() {
        println!("  {}: {}", day.day, day.food);
    }
}

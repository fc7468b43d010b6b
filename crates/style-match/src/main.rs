//! Command-line front end: acquires images, prints analyses and keeps the
//! local profile. All colour logic lives in the library crate.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use style_match::config::Configuration;
use style_match::events::BatchFailure;
use style_match::harmony::{ColorHarmony, harmony_for_hex};
use style_match::profile::{LocalStore, StyleProfile};
use style_match::recommend::{self, NamedColor, NamedShade, SeasonalTrends, ShadeRange};
use style_match::season::Season;
use style_match::tasks::{files, loader};
use style_match::tone::{self, ToneAnalysis};

const NO_SKIN_MESSAGE: &str = "Could not detect skin in image. Please try again.";

#[derive(Debug, Parser)]
#[command(
    name = "style-match",
    version,
    about = "Skin-tone analysis with colour and wardrobe guidance"
)]
struct Args {
    /// Path to YAML config (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample and classify the face in an image file
    Analyze {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
        /// Append the result to the profile history
        #[arg(long)]
        save: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a random skin tone from the built-in palette
    Demo {
        /// Deterministic RNG seed (overrides demo-seed from the config)
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
        #[arg(long)]
        save: bool,
        #[arg(long)]
        json: bool,
    },
    /// Classify every image in a directory
    Batch {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        /// Only scan the top level of DIR
        #[arg(long)]
        no_recursive: bool,
    },
    /// List saved analyses, or export them as JSON
    History {
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Show points and achievements
    Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Report<'a> {
    analysis: &'a ToneAnalysis,
    season: Season,
    shade_range: ShadeRange,
    shades: [NamedShade; 4],
    harmony: ColorHarmony,
    best_colors: &'static [NamedColor],
    colors_to_avoid: &'static [NamedColor],
    seasonal_palette: [&'static str; 5],
    seasonal_tips: [&'static str; 2],
    seasonal_trends: SeasonalTrends,
}

impl<'a> Report<'a> {
    fn new(analysis: &'a ToneAnalysis, season: Season) -> Result<Self> {
        let undertone = analysis.undertone();
        Ok(Self {
            analysis,
            season,
            shade_range: recommend::shade_range(analysis.rgb()),
            shades: recommend::shade_recommendations(analysis.rgb()),
            harmony: harmony_for_hex(analysis.hex())?,
            best_colors: recommend::best_colors(undertone),
            colors_to_avoid: recommend::colors_to_avoid(undertone),
            seasonal_palette: recommend::seasonal_palette(season, undertone),
            seasonal_tips: recommend::seasonal_tips(season),
            seasonal_trends: recommend::seasonal_trends(season),
        })
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }
        let a = self.analysis;
        println!("# skin tone");
        println!("  category:   {}", a.category());
        println!("  undertone:  {}", a.undertone());
        println!("  confidence: {}%", a.confidence());
        println!("  brightness: {} ({})", a.brightness(), a.brightness_bucket());
        println!("  color:      {}  {}  {}", a.hex(), a.rgb_string(), a.hsl_string());
        println!(
            "  range:      {} .. {}",
            self.shade_range.darker.hex(),
            self.shade_range.lighter.hex()
        );
        println!("\n# foundation shades");
        for shade in &self.shades {
            println!(
                "  {:<18} {}  {}",
                shade.name,
                shade.color.hex(),
                shade.description
            );
        }
        println!("\n# color harmony");
        println!("  complementary: {}", self.harmony.complementary);
        println!("  analogous:     {}", self.harmony.analogous.join(", "));
        println!("  triadic:       {}", self.harmony.triadic.join(", "));
        println!("\n# best colors");
        for color in self.best_colors {
            println!("  {:<14} {}", color.name, color.hex);
        }
        println!("\n# colors to avoid");
        for color in self.colors_to_avoid {
            println!("  {:<14} {}", color.name, color.hex);
        }
        println!("\n# {} palette", self.season);
        println!("  {}", self.seasonal_palette.join(", "));
        println!("\n# {} tips", self.season);
        for tip in self.seasonal_tips {
            println!("  - {tip}");
        }
        let trends = &self.seasonal_trends;
        println!("\n# {} trends", self.season);
        println!("  colors:  {}", trends.colors.join(", "));
        println!("  styles:  {}", trends.styles.join(", "));
        println!("  fabrics: {}", trends.fabrics.join(", "));
        Ok(())
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        config,
        verbose,
        command,
    } = Args::parse();
    init_tracing(verbose);

    let cfg = Configuration::load(config.as_deref())?;
    tracing::debug!("configuration: {:#?}", cfg);

    match command {
        Command::Analyze { image, save, json } => {
            let decoded = loader::decode_off_thread(image.clone()).await?;
            let Ok(analysis) = tone::classify_image(&decoded.frame, &cfg.sampler) else {
                bail!(NO_SKIN_MESSAGE);
            };
            tracing::info!(
                path = %image.display(),
                category = analysis.category(),
                confidence = analysis.confidence(),
                "analysis completed"
            );
            finish_analysis(&cfg, analysis, save, json)
        }
        Command::Demo { seed, save, json } => {
            let mut rng = match seed.or(cfg.demo_seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let analysis = tone::run_demo(&mut rng);
            tracing::info!(category = analysis.category(), "demo analysis complete");
            finish_analysis(&cfg, analysis, save, json)
        }
        Command::Batch { dir, no_recursive } => run_batch(&cfg, dir, !no_recursive).await,
        Command::History { export } => show_history(&cfg, export),
        Command::Profile => show_profile(&cfg),
    }
}

fn finish_analysis(
    cfg: &Configuration,
    analysis: ToneAnalysis,
    save: bool,
    json: bool,
) -> Result<()> {
    let now = cfg.now();
    Report::new(&analysis, Season::at(&now))?.print(json)?;
    if !save {
        return Ok(());
    }

    let mut store = open_store(cfg)?;
    let mut profile = StyleProfile::load(&store).context("failed to read saved profile")?;
    let unlocked = profile.record_analysis(analysis, &now, &cfg.history_policy());
    profile
        .save(&mut store)
        .with_context(|| format!("failed to save profile to {}", store.path().display()))?;
    tracing::info!(points = profile.points, "analysis saved to profile");
    for achievement in unlocked {
        eprintln!("Achievement unlocked: {achievement}!");
    }
    Ok(())
}

async fn run_batch(cfg: &Configuration, dir: PathBuf, recursive: bool) -> Result<()> {
    let paths = files::scan_images(&dir, recursive)
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    tracing::info!(count = paths.len(), "scanned images");

    let outcomes =
        loader::analyze_batch(paths, cfg.loader_max_concurrent_decodes, cfg.sampler.clone()).await;
    let mut analyzed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(analysis) => {
                analyzed += 1;
                println!(
                    "{}\t{}\t{}\t{}%",
                    outcome.path.display(),
                    analysis.category(),
                    analysis.hex(),
                    analysis.confidence()
                );
            }
            Err(BatchFailure::NoSkinDetected) => {
                println!("{}\t(no skin detected)", outcome.path.display());
            }
            Err(BatchFailure::Decode(reason)) => {
                println!("{}\t(unreadable: {reason})", outcome.path.display());
            }
        }
    }
    tracing::info!(total = outcomes.len(), analyzed, "batch complete");
    Ok(())
}

fn show_history(cfg: &Configuration, export: Option<PathBuf>) -> Result<()> {
    let store = open_store(cfg)?;
    let profile = StyleProfile::load(&store)?;
    if let Some(path) = export {
        profile
            .export_history(&path)
            .with_context(|| format!("failed to export history to {}", path.display()))?;
        tracing::info!(path = %path.display(), count = profile.analyses.len(), "history exported");
        return Ok(());
    }

    if profile.analyses.is_empty() {
        println!("(no saved analyses)");
        return Ok(());
    }
    for record in &profile.analyses {
        println!(
            "{}  {:<6}  {:<20} {}  {}%",
            record.date.format("%Y-%m-%d %H:%M"),
            record.season,
            record.analysis.category(),
            record.analysis.hex(),
            record.analysis.confidence()
        );
    }
    Ok(())
}

fn show_profile(cfg: &Configuration) -> Result<()> {
    let store = open_store(cfg)?;
    let profile = StyleProfile::load(&store)?;
    println!("analyses: {}", profile.analyses.len());
    println!("points:   {}", profile.points);
    println!("seasons:  {}", profile.seasons_seen());
    println!("\n# achievements");
    for achievement in style_match::profile::Achievement::ALL {
        let mark = if profile.achievements.contains(&achievement) {
            "x"
        } else {
            " "
        };
        println!("  [{mark}] {:<18} {}", achievement.title(), achievement.description());
    }
    Ok(())
}

fn open_store(cfg: &Configuration) -> Result<LocalStore> {
    LocalStore::open(&cfg.profile_path)
        .with_context(|| format!("failed to open profile store {}", cfg.profile_path.display()))
}

//! narrative-outline CLI - health narrative outline tool

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use narrative_outline::render::blocks_to_json;
use narrative_outline::{
    narrative_from_json, Category, CategoryMap, CleanupPreset, JsonFormat, Outliner,
    OutlinerResult, RenderOptions,
};

#[derive(Parser)]
#[command(name = "narrative-outline")]
#[command(version)]
#[command(
    about = "Turn AI-generated health narratives into Markdown, text, and JSON outlines",
    long_about = None
)]
struct Cli {
    /// Input narrative file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// How the input is read and parsed.
#[derive(Args, Clone)]
struct SourceArgs {
    /// Treat the input as a JSON response body from the analysis backend
    #[arg(long)]
    response: bool,

    /// Narrative cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    /// JSON file mapping section titles to category names
    #[arg(long, value_name = "FILE", env = "NARRATIVE_OUTLINE_CATEGORIES")]
    categories: Option<PathBuf>,

    /// Use only the categories file, without the built-in titles
    #[arg(long, requires = "categories")]
    replace_categories: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert narratives to all formats (Markdown, text, JSON)
    Convert {
        /// Input narrative files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Convert a narrative to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input narrative file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading level for section titles (1-6)
        #[arg(long, default_value = "2")]
        heading_level: u8,

        /// Show each section's category under its title
        #[arg(long)]
        labels: bool,

        /// Do not escape Markdown special characters in item text
        #[arg(long)]
        no_escape: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Convert a narrative to plain text
    Text {
        /// Input narrative file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Show each section's category under its title
        #[arg(long)]
        labels: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Convert a narrative to JSON
    Json {
        /// Input narrative file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output display blocks instead of the outline
        #[arg(long)]
        blocks: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show outline structure and statistics
    Info {
        /// Input narrative file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the effective title to category table
    Categories {
        /// JSON file mapping section titles to category names
        #[arg(long, value_name = "FILE", env = "NARRATIVE_OUTLINE_CATEGORIES")]
        categories: Option<PathBuf>,

        /// Use only the categories file, without the built-in titles
        #[arg(long, requires = "categories")]
        replace_categories: bool,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Line endings and Unicode normalization only
    Minimal,
    /// Minimal plus bullet and emphasis normalization
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            source,
        }) => cmd_convert(&inputs, output.as_deref(), &source),
        Some(Commands::Markdown {
            input,
            output,
            heading_level,
            labels,
            no_escape,
            source,
        }) => {
            let options = RenderOptions::new()
                .with_heading_level(heading_level)
                .with_category(labels)
                .with_escaping(!no_escape);
            cmd_markdown(&input, output.as_deref(), options, &source)
        }
        Some(Commands::Text {
            input,
            output,
            labels,
            source,
        }) => cmd_text(&input, output.as_deref(), labels, &source),
        Some(Commands::Json {
            input,
            output,
            compact,
            blocks,
            source,
        }) => cmd_json(&input, output.as_deref(), compact, blocks, &source),
        Some(Commands::Info { input, source }) => cmd_info(&input, &source),
        Some(Commands::Categories {
            categories,
            replace_categories,
            json,
        }) => cmd_categories(categories.as_deref(), replace_categories, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: Markdown to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_markdown(&input, None, RenderOptions::default(), &cli.source)
            } else {
                println!("{}", "Usage: narrative-outline <FILE>".yellow());
                println!("       narrative-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a file, or stdin for "-".
fn read_input(input: &Path) -> CliResult<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

/// Read the narrative text, unwrapping a response body when asked to.
fn load_narrative(input: &Path, source: &SourceArgs) -> CliResult<String> {
    let contents = read_input(input)?;
    if !source.response {
        return Ok(contents);
    }

    match narrative_from_json(&contents)? {
        Some(narrative) => Ok(narrative),
        None => {
            warn!("no narrative in response body {}", input.display());
            eprintln!(
                "{} {} carries no narrative",
                "Warning:".yellow().bold(),
                input.display()
            );
            Ok(String::new())
        }
    }
}

fn load_categories(path: Option<&Path>, replace: bool) -> CliResult<CategoryMap> {
    let Some(path) = path else {
        return Ok(CategoryMap::new());
    };

    let loaded = CategoryMap::from_path(path)?;
    debug!(
        "loaded {} category entries from {}",
        loaded.len(),
        path.display()
    );

    if replace {
        Ok(loaded)
    } else {
        let mut categories = CategoryMap::new();
        categories.extend(loaded);
        Ok(categories)
    }
}

fn build_outliner(source: &SourceArgs) -> CliResult<Outliner> {
    let categories = load_categories(source.categories.as_deref(), source.replace_categories)?;
    let mut outliner = Outliner::new().with_categories(categories);
    if let Some(level) = source.cleanup {
        outliner = outliner.with_cleanup(level.into());
    }
    Ok(outliner)
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(inputs: &[PathBuf], output: Option<&Path>, source: &SourceArgs) -> CliResult<()> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("outline_output"));

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing narratives...");
    let narratives = inputs
        .iter()
        .map(|input| load_narrative(input, source))
        .collect::<CliResult<Vec<String>>>()?;
    let results = build_outliner(source)?.parse_batch(&narratives);
    pb.inc(1);

    let stems = output_stems(inputs);
    let mut written = Vec::with_capacity(inputs.len());
    for (stem, result) in stems.into_iter().zip(&results) {
        pb.set_message(format!("Writing {}...", stem));

        fs::write(output_dir.join(format!("{}.md", stem)), result.to_markdown()?)?;
        fs::write(output_dir.join(format!("{}.txt", stem)), result.to_text()?)?;
        fs::write(
            output_dir.join(format!("{}.json", stem)),
            result.to_json(JsonFormat::Pretty)?,
        )?;

        written.push(stem);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {}",
        "Output files in".green().bold(),
        output_dir.display()
    );
    for (i, stem) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() {
            "└─"
        } else {
            "├─"
        };
        println!("  {} {}.md, {}.txt, {}.json", branch.dimmed(), stem, stem, stem);
    }

    Ok(())
}

/// Output file stems, one per input, made unique with a `-N` suffix.
fn output_stems(inputs: &[PathBuf]) -> Vec<String> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = match input.file_stem() {
                Some(stem) if input.as_os_str() != "-" => stem.to_string_lossy().into_owned(),
                _ => "narrative".to_string(),
            };
            let mut candidate = stem.clone();
            let mut n = 2;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{}-{}", stem, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    options: RenderOptions,
    source: &SourceArgs,
) -> CliResult<()> {
    let narrative = load_narrative(input, source)?;
    let result = build_outliner(source)?
        .with_render_options(options)
        .parse(&narrative);

    write_output(&result.to_markdown()?, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    labels: bool,
    source: &SourceArgs,
) -> CliResult<()> {
    let narrative = load_narrative(input, source)?;
    let mut outliner = build_outliner(source)?;
    if labels {
        outliner = outliner.with_category_labels();
    }

    write_output(&outliner.parse(&narrative).to_text()?, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    blocks: bool,
    source: &SourceArgs,
) -> CliResult<()> {
    let narrative = load_narrative(input, source)?;
    let result = build_outliner(source)?.parse(&narrative);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if blocks {
        blocks_to_json(&result.blocks(), format)?
    } else {
        result.to_json(format)?
    };

    write_output(&json, output)
}

fn cmd_info(input: &Path, source: &SourceArgs) -> CliResult<()> {
    let narrative = load_narrative(input, source)?;
    let result: OutlinerResult = build_outliner(source)?.parse(&narrative);
    let stats = result.to_markdown_with_stats()?.stats;

    println!("{}", "Outline Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!(
        "{}: {}",
        "Uncategorized".bold(),
        stats.uncategorized_count
    );

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for node in result.outline() {
        let title = if node.title.is_empty() {
            "(untitled)".dimmed().to_string()
        } else {
            node.title.clone()
        };
        println!(
            "  {} {} ({} items)",
            format!("[{}]", node.category.label()).color(accent_color(node.category)),
            title,
            node.items.len()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Numbered items".bold(), stats.numbered_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_categories(path: Option<&Path>, replace: bool, json: bool) -> CliResult<()> {
    let categories = load_categories(path, replace)?;

    if json {
        println!("{}", categories.to_json()?);
        return Ok(());
    }

    println!("{}", "Section Categories".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if categories.is_empty() {
        println!("  {}", "(no entries; every section is General)".dimmed());
    }
    for (title, category) in categories.iter() {
        println!(
            "  {} {} {}",
            title,
            "→".dimmed(),
            category.name().color(accent_color(category))
        );
    }

    println!();
    println!("{}", "Available Categories".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for category in Category::ALL {
        println!(
            "  {:<16} {:<16} {}",
            category.name().color(accent_color(category)),
            category.label(),
            category.icon().dimmed()
        );
    }

    Ok(())
}

/// Terminal color for a category's accent.
fn accent_color(category: Category) -> Color {
    match category.accent() {
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "amber" => Color::Yellow,
        "indigo" | "purple" => Color::Magenta,
        "teal" => Color::Cyan,
        _ => Color::White,
    }
}

fn cmd_version() {
    println!(
        "{} {}",
        "narrative-outline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Health narrative outline tool");
    println!();
    println!("License: MIT");
}

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use md2notion::{Config, PageMeta};

#[derive(Parser)]
#[command(name = "md2notion")]
#[command(about = "Convert Markdown files to document-store page requests")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output JSON file (defaults to input name with .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (defaults to the input file stem)
    #[arg(short, long)]
    topic: Option<String>,

    /// Category recorded on the page
    #[arg(short, long)]
    category: Option<String>,

    /// Keyword recorded on the page (repeatable)
    #[arg(short, long)]
    keyword: Vec<String>,

    /// Config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = Config::load(&cli.config);

    let topic = cli.topic.unwrap_or_else(|| {
        cli.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let meta = PageMeta {
        topic: &topic,
        category: cli.category.as_deref(),
        keywords: &cli.keyword,
    };

    // Build the page request
    let json = match md2notion::markdown_to_page_json(&markdown, &meta, &config) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("json"));

    // Write JSON
    if let Err(e) = fs::write(&output, json) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tafaseer_seo::{config, corpus, output, pages, sitemap, template};

#[derive(Parser)]
#[command(name = "tafaseer-seo")]
#[command(about = "SEO artifact generator for the Tafaseer Quran app")]
#[command(long_about = "\
SEO artifact generator for the Tafaseer Quran app

Takes the app's JSON content corpus and the web build's index.html, and
produces pre-rendered pages plus a sitemap for search engines. A pure batch
transform: no network, no server, safe to re-run any time.

Expected layout:

  assets/data/
  ├── seo.toml                 # Generator config (optional)
  ├── surahs.json              # Surah index: id, names, ayah count, type
  └── ayahs/
      └── surah_<id>.json      # Ayahs of one surah

  build/web/index.html         # Base template from the app's web build

Generated output:

  build/web/surah/<id>.html             # One page per surah
  build/web/surah/<id>/ayah/<n>.html    # One page per in-scope ayah
  web/sitemap.xml                       # One URL entry per page

Popular surahs (see seo.toml) get a page for every ayah; the rest get the
first ten. A missing surah index or template aborts the run; a broken
per-surah ayah file only degrades that surah to an ayah-less page.

Run 'tafaseer-seo gen-config' to print a documented seo.toml.")]
#[command(version)]
struct Cli {
    /// Corpus data directory (surahs.json, ayahs/, optional seo.toml)
    #[arg(long, default_value = "assets/data", global = true)]
    data: PathBuf,

    /// Output directory for rendered pages
    #[arg(long, default_value = "build/web", global = true)]
    output: PathBuf,

    /// Base HTML template (defaults to <output>/index.html)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Sitemap output path
    #[arg(long, default_value = "web/sitemap.xml", global = true)]
    sitemap: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render per-surah and per-ayah HTML pages
    Pages,
    /// Build sitemap.xml for the same page set
    Sitemap,
    /// Run both jobs: pages → sitemap
    Build,
    /// Load and validate corpus, config, and template without writing
    Check,
    /// Print a stock seo.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let template_path = cli
        .template
        .clone()
        .unwrap_or_else(|| cli.output.join("index.html"));

    match cli.command {
        Command::Pages => {
            let config = config::load_config(&cli.data)?;
            let report = pages::generate(&cli.data, &template_path, &cli.output, &config)?;
            output::print_pages_report(&report);
        }
        Command::Sitemap => {
            let config = config::load_config(&cli.data)?;
            let date = chrono::Utc::now().date_naive();
            let report = sitemap::generate(&cli.data, &cli.sitemap, &config, date)?;
            output::print_sitemap_report(&report);
        }
        Command::Build => {
            let config = config::load_config(&cli.data)?;

            println!("==> Stage 1: Rendering pages → {}", cli.output.display());
            let report = pages::generate(&cli.data, &template_path, &cli.output, &config)?;
            output::print_pages_report(&report);

            println!("==> Stage 2: Building sitemap → {}", cli.sitemap.display());
            let date = chrono::Utc::now().date_naive();
            let report = sitemap::generate(&cli.data, &cli.sitemap, &config, date)?;
            output::print_sitemap_report(&report);

            println!("==> Build complete");
        }
        Command::Check => {
            println!("==> Checking {}", cli.data.display());
            let config = config::load_config(&cli.data)?;
            let surahs = corpus::load_surahs(&cli.data)?;
            template::load(&template_path)?;

            let entries: Vec<_> = surahs
                .into_iter()
                .map(|surah| {
                    let (ayahs, _) = corpus::load_ayahs_or_warn(&cli.data, surah.id);
                    (surah, ayahs)
                })
                .collect();
            output::print_check_output(&config, &entries);
            println!("==> Corpus is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

use std::{fmt::Write, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, arg, command};
use tracing::{Level, debug, instrument};
use tracing_subscriber::EnvFilter;

use common::{
    catalog::{Catalog, EMBEDDED_CATALOG, ProjectRecord},
    config::{ContactConfig, EMBEDDED_CONFIG, SiteConfig},
};

#[derive(Parser)]
#[command(version, about = "validate portfolio content before it is compiled into the site", long_about = None)]
struct Cli {
    /// catalog file (defaults to the one built into the site)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// site config file (defaults to the one built into the site)
    #[arg(long)]
    config: Option<PathBuf>,

    /// print the parsed content as json instead of a summary
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// check the catalog and list its contents
    Catalog,

    /// show one project from the catalog
    Project {
        /// project id
        #[arg()]
        id: String,
    },

    /// check the site config
    Config,
}

#[instrument(level=Level::DEBUG, skip(embedded))]
async fn read_doc(path: &Option<PathBuf>, embedded: &'static str) -> Result<String> {
    match path {
        Some(path) => {
            debug!("reading {}", path.display());
            tokio::fs::read_to_string(path).await.map_err(|err| {
                anyhow::Error::msg(format!("failed to read {}: {err}", path.display()))
            })
        }
        None => Ok(embedded.to_owned()),
    }
}

async fn load_catalog(path: &Option<PathBuf>) -> Result<Catalog> {
    Catalog::from_toml(&read_doc(path, EMBEDDED_CATALOG).await?)
}

async fn load_config(path: &Option<PathBuf>) -> Result<SiteConfig> {
    SiteConfig::from_toml(&read_doc(path, EMBEDDED_CONFIG).await?)
}

fn summarize_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "catalog ok: {} projects, {} skills, {} tech entries",
        catalog.projects().len(),
        catalog.skills().len(),
        catalog.tech().len()
    );

    for project in catalog.projects() {
        let media = if project.media.has_video() { "video" } else { "image" };
        let _ = writeln!(out, "  {:<28} {:<16} {media}", project.id, project.category);
    }

    for skill in catalog.skills() {
        let _ = writeln!(
            out,
            "  {} {:<26} {:>3}%",
            skill.icon.symbol(),
            skill.name,
            skill.proficiency
        );
    }

    out
}

fn describe_project(project: &ProjectRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", project.title, project.category);
    let _ = writeln!(out, "  problem:  {}", project.problem);
    let _ = writeln!(out, "  solution: {}", project.solution);
    let _ = writeln!(out, "  stack:    {}", project.tech_stack.join(", "));
    for impact in &project.impact {
        let _ = writeln!(out, "  - {impact}");
    }
    let _ = writeln!(out, "  preview:  {}", project.media.poster().unwrap_or("none"));
    let _ = writeln!(out, "  demo:     {}", project.demo_link());
    let _ = writeln!(out, "  repo:     {}", project.repo_link());

    out
}

fn summarize_config(config: &SiteConfig) -> String {
    let transport = match &config.contact {
        ContactConfig::Simulated => String::from("simulated"),
        ContactConfig::Http { endpoint_root } => format!("http ({endpoint_root})"),
    };

    format!(
        "config ok: {} <{}>\n  submit delay {} ms, toast {} ms, navbar condenses past {} px\n  contact transport: {transport}\n",
        config.owner.name,
        config.owner.email,
        config.timing.submit_delay_ms,
        config.timing.toast_ms,
        config.nav.condense_threshold_px,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Catalog) => {
            let catalog = load_catalog(&cli.catalog).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                print!("{}", summarize_catalog(&catalog));
            }
        }
        Some(Commands::Project { id }) => {
            let catalog = load_catalog(&cli.catalog).await?;

            let project = catalog
                .project(id)
                .ok_or_else(|| anyhow::Error::msg(format!("no project with id {id}")))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(project)?);
            } else {
                print!("{}", describe_project(project));
            }
        }
        Some(Commands::Config) => {
            let config = load_config(&cli.config).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", summarize_config(&config));
            }
        }
        None => {
            let catalog = load_catalog(&cli.catalog).await?;
            let config = load_config(&cli.config).await?;

            print!("{}", summarize_catalog(&catalog));
            print!("{}", summarize_config(&config));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_summary_lists_every_project() {
        let catalog = Catalog::embedded().unwrap();
        let summary = summarize_catalog(&catalog);

        assert!(summary.starts_with("catalog ok: 5 projects, 4 skills, 10 tech entries"));
        for project in catalog.projects() {
            assert!(summary.contains(&project.id));
        }
    }

    #[test]
    fn project_description_uses_placeholders() {
        let catalog = Catalog::embedded().unwrap();
        let text = describe_project(catalog.project("veosense").unwrap());

        assert!(text.starts_with("Veosense: Blind Assistant (Accessibility)"));
        assert!(text.contains("  demo:     #"));
        assert!(text.contains("  preview:  /projects/veosense.mp4"));
    }

    #[test]
    fn config_summary_names_transport() {
        let config = SiteConfig::embedded().unwrap();

        assert!(summarize_config(&config).contains("contact transport: simulated"));
    }

    #[tokio::test]
    async fn embedded_doc_when_no_path() {
        let doc = read_doc(&None, EMBEDDED_CONFIG).await.unwrap();

        assert_eq!(doc, EMBEDDED_CONFIG);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_doc(&Some(PathBuf::from("/nonexistent/site.toml")), EMBEDDED_CONFIG)
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to read /nonexistent/site.toml"));
    }
}

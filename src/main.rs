use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semver_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use semver_bump::config::{self, Config};
use semver_bump::domain::SuffixFormat;
use semver_bump::git::Git2Repository;
use semver_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    version,
    about = "Compute the next semantic version from conventional commits since the last tag"
)]
struct Args {
    #[arg(long, help = "Prefix of version tags (e.g., 'v', 'k8s') [default: v]")]
    prefix: Option<String>,

    #[arg(long, help = "Version to start from instead of the latest tag (e.g., '1.2.3')")]
    baseline: Option<String>,

    #[arg(long, help = "Always add a suffix to the version")]
    add_suffix: bool,

    #[arg(long, help = "Suffix format: 'short-hash' or 'datetime' [default: short-hash]")]
    suffix_format: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(short, long, help = "Show debug logs")]
    verbose: bool,
}

impl Args {
    /// Merge flags over the loaded configuration
    fn workflow_args(&self, config: &Config) -> BumpWorkflowArgs {
        let mut args = BumpWorkflowArgs::from_config(config);

        if let Some(prefix) = &self.prefix {
            args.prefix = prefix.clone();
        }
        if let Some(format) = &self.suffix_format {
            args.suffix_format = SuffixFormat::parse_lenient(format);
        }
        args.baseline = self.baseline.clone().filter(|b| !b.is_empty());
        args.add_suffix |= self.add_suffix;
        args
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("semver_bump=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("semver_bump=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    ui::display_status("--- SemVer Version Bumper (Conventional Commits) ---");

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let workflow_args = args.workflow_args(&config);

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Not in a git repository: {}", args.repo))?;

    let result = match run_bump_workflow(&repo, &workflow_args, chrono::Utc::now()) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_workflow_summary(&result, &workflow_args.prefix);

    println!("{}", result.version);
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use buildver::config;
use buildver::domain::{BranchPolicy, OutputMode};
use buildver::git::Git2Repository;
use buildver::ui;
use buildver::VersionResolver;

#[derive(Clone, Copy, clap::ValueEnum)]
enum PolicyArg {
    /// Reference branch from the marker character in HEAD's tag
    Marker,
    /// Reference branch from the checked-out branch name
    Nickname,
}

#[derive(clap::Parser)]
#[command(
    name = "buildver",
    version,
    about = "Print a build version string derived from git tags"
)]
struct Args {
    #[arg(help = "Pass `light` to print only the tag without marker characters")]
    mode: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Path inside the repository to describe"
    )]
    repo: String,

    #[arg(long, help = "Remote holding the reference branches")]
    remote: Option<String>,

    #[arg(long, value_enum, help = "Reference branch selection policy")]
    policy: Option<PolicyArg>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log progress to stderr (repeat for more)")]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let mut config = config::load_config(args.config.as_deref())?;

    if let Some(remote) = &args.remote {
        config.remote = remote.clone();
    }
    if let Some(policy) = args.policy {
        config.policy = override_policy(config.policy, policy);
    }

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Not in a git repository: {}", args.repo))?
        .with_abbrev(config.abbrev);

    let resolution = VersionResolver::from_config(&repo, &config).resolve()?;
    log::info!(
        "HEAD {} measured against {}/{} ({})",
        resolution.head,
        config.remote,
        resolution.branch,
        resolution.reference
    );

    Ok(resolution.render(OutputMode::from_arg(args.mode.as_deref())))
}

/// Keeps the configured policy when it already has the requested kind
fn override_policy(configured: BranchPolicy, requested: PolicyArg) -> BranchPolicy {
    let same_kind = matches!(
        (requested, &configured),
        (PolicyArg::Marker, BranchPolicy::Marker { .. })
            | (PolicyArg::Nickname, BranchPolicy::Nickname { .. })
    );

    if same_kind {
        return configured;
    }

    match requested {
        PolicyArg::Marker => BranchPolicy::marker(),
        PolicyArg::Nickname => BranchPolicy::nickname(),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

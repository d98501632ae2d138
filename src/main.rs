use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use passprof::collect::collect_profile;
use passprof::utils::squash;
use passprof::{Profile, ProfilerConfig, WordlistPipeline, WordlistWriter};

/// Targeted password wordlist profiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Build the profile with interactive questions
    #[arg(short, long, conflicts_with = "profile")]
    interactive: bool,

    /// Read the profile from a TOML file
    #[arg(short, long)]
    profile: Option<String>,

    /// Output wordlist path (defaults to <first>_<last>_wordlist.txt)
    #[arg(short, long)]
    output: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "passprof.toml")]
    config: String,

    /// Write a default config file to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Quiet mode (don't print banner)
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    if !args.quiet {
        display_banner();
    }

    if args.init_config {
        ProfilerConfig::save_default(&args.config)
            .with_context(|| format!("Failed to write default config to {}", args.config))?;
        println!("[+] Wrote default configuration to {}", args.config);
        return Ok(());
    }

    let config = ProfilerConfig::load(&args.config)?;
    info!("Configuration loaded from: {}", args.config);

    let profile = if args.interactive {
        collect_profile()?
    } else if let Some(path) = &args.profile {
        let profile = Profile::from_toml_file(path)
            .with_context(|| format!("Failed to load profile from {}", path))?;
        info!("Profile loaded from: {}", path);
        profile
    } else {
        Args::command().print_help()?;
        return Ok(());
    };

    info!("Generating wordlist...");
    let wordlist = WordlistPipeline::run(&profile, &config);

    let output = args
        .output
        .unwrap_or_else(|| default_output_name(&profile));
    let written = WordlistWriter::save(&output, &wordlist)?;

    println!("\n[+] Saved {} passwords to {}", written, output);
    println!("[+] Examples of generated passwords:");
    for example in wordlist.iter().take(20) {
        println!("    {}", example);
    }

    Ok(())
}

fn default_output_name(profile: &Profile) -> String {
    let first = squash(&profile.first_name);
    let last = squash(&profile.last_name);

    if last.is_empty() {
        format!("{}_wordlist.txt", first)
    } else {
        format!("{}_{}_wordlist.txt", first, last)
    }
}

fn display_banner() {
    println!(
        "
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║   🔑 PASSWORD PROFILE WORDLIST GENERATOR v1.0            ║
║   Targeted Wordlists From Personal Profiles               ║
║                                                           ║
║   ⚠️  AUTHORIZED SECURITY AUDITS ONLY                     ║
║   Only profile accounts you own or may test              ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝
    "
    );
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .init();

    Ok(())
}

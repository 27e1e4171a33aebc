//! mdgrid CLI - expand grid markers in Markdown documents

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use mdgrid::{
    GridExtension, GridResult, GridWarning, PassthroughRenderer, ProfileConfig,
    ProfileRegistry,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mdgrid")]
#[command(version)]
#[command(about = "mdgrid - Row/column grid markers for Markdown", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Built-in or configured profile to use
    #[arg(short, long)]
    profile: Option<String>,

    /// Profile config file (.toml, .json, .yaml)
    #[cfg(feature = "config")]
    #[arg(short, long)]
    config: Option<String>,

    /// Pipeline stage to run
    #[arg(short, long, value_enum, default_value_t = Stage::Full)]
    stage: Stage,

    /// List the available profiles and exit
    #[arg(long)]
    list_profiles: bool,

    /// Strict mode: exit with error if any warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Stage {
    /// Both hooks, without a Markdown renderer in between
    Full,
    /// Only replace marker lines with intermediate tags
    Pre,
    /// Only expand intermediate tags in already rendered text
    Post,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[mdgrid] Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> GridResult<()> {
    let registry = ProfileRegistry::builtin()?;

    if cli.list_profiles {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = build_config(&cli)?;
    let ext = GridExtension::from_config(config.as_ref(), &registry)?;

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let (result, warnings): (String, Vec<GridWarning>) = match cli.stage {
        Stage::Full => {
            let output = ext.convert(&input, &PassthroughRenderer)?;
            (output.content, output.warnings)
        }
        Stage::Pre => {
            let lines: Vec<&str> = input.lines().collect();
            let pre = ext.preprocess(&lines);
            (pre.lines.join("\n"), pre.warnings)
        }
        Stage::Post => (ext.postprocess(&input)?, Vec::new()),
    };

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet {
        for warning in &warnings {
            eprintln!("[mdgrid] {}", warning);
        }
    }

    if cli.strict && !warnings.is_empty() {
        eprintln!("Error: {} grid warning(s) in strict mode", warnings.len());
        std::process::exit(1);
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result.trim_end_matches('\n'))?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", result.trim_end_matches('\n'));
        }
    }

    Ok(())
}

/// Merge the config file and `--profile` into one config.
///
/// `--profile` overrides the base named in the file.
#[cfg(feature = "cli")]
fn build_config(cli: &Cli) -> GridResult<Option<ProfileConfig>> {
    #[cfg(feature = "config")]
    let mut config = match cli.config {
        Some(ref path) => Some(mdgrid::files::load_profile_config(path)?),
        None => None,
    };
    #[cfg(not(feature = "config"))]
    let mut config: Option<ProfileConfig> = None;

    if let Some(ref name) = cli.profile {
        config.get_or_insert_with(ProfileConfig::default).profile = Some(name.clone());
    }
    Ok(config)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mdgrid --features cli");
    eprintln!("  mdgrid [OPTIONS] [INPUT_FILE]");
}

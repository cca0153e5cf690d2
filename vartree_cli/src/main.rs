//! # vartree CLI
//!
//! Parses a tree string, prints the deferred structure and, when value spaces
//! are given, resolves it.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use vartree::logging::codes;
use vartree::{log_error, log_info, Converter, GrammarConfig, GrammarError, TreeParser};

#[derive(Debug, Parser)]
#[command(name = "vartree", version, about = "Parse and resolve nested collection grammars")]
struct Cli {
    /// Tree string, e.g. "0,1:[2~4,#0]"
    tree: String,

    /// Number of levels in the tree
    #[arg(short, long, default_value_t = 1)]
    depth: usize,

    /// Value space for one depth: "1,5,9" or the half-open range "0..10".
    /// Repeat once per depth; the last space is reused for deeper levels.
    #[arg(short, long)]
    space: Vec<String>,

    /// Seed for sample and random placeholders
    #[arg(long)]
    seed: Option<u64>,

    /// Original value excluded by "??" placeholders
    #[arg(long, allow_hyphen_values = true)]
    original: Option<i64>,

    /// TOML file overriding grammar symbols
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved tree as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => GrammarConfig::from_file(path)?,
        None => GrammarConfig::default(),
    };
    let parser = TreeParser::with_config(config)?;

    let converters: Vec<Converter<i64>> = (0..cli.depth).map(|_| Converter::parsing()).collect();
    let tree = match parser.parse_tree(&cli.tree, &converters, 0) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("{}", render_diagnostic(&cli.tree, &error));
            std::process::exit(1);
        }
    };

    if cli.space.is_empty() {
        println!("{}", tree);
        return Ok(());
    }

    let spaces = cli
        .space
        .iter()
        .map(|space| parse_space(space))
        .collect::<Result<Vec<_>, _>>()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let resolved = match tree.resolve_deep(spaces.as_slice(), cli.original.as_ref(), &mut rng) {
        Ok(resolved) => resolved,
        Err(error) => {
            log_error!(error.error_code(), "Resolution failed",
                "placeholder" => error.placeholder().unwrap_or("-")
            );
            eprintln!("error: {}", error);
            std::process::exit(1);
        }
    };

    log_info!("Resolved tree", "combinations" => resolved.combinations());

    if cli.json {
        println!("{}", resolved.to_json_pretty()?);
    } else {
        println!("{}", resolved);
    }

    Ok(())
}

/// Parse a value space: a comma separated list or a half-open `a..b` range
fn parse_space(text: &str) -> Result<Vec<i64>, String> {
    let text = text.trim();
    if let Some((start, end)) = text.split_once("..") {
        let start = parse_integer(start)?;
        let end = parse_integer(end)?;
        return Ok((start..end).collect());
    }

    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',').map(parse_integer).collect()
}

fn parse_integer(text: &str) -> Result<i64, String> {
    text.trim()
        .parse()
        .map_err(|error| format!("invalid space value {:?}: {}", text.trim(), error))
}

/// Error line followed by the input with a caret under the failing position
fn render_diagnostic(input: &str, error: &GrammarError) -> String {
    let position = error.position().min(input.len());
    let column = input
        .char_indices()
        .take_while(|(offset, _)| *offset < position)
        .count();

    let code = error.error_code();
    format!(
        "error[{}]: {}\n  |\n  | {}\n  | {}^\n  = {} error: {}",
        code,
        error.cause(),
        input,
        " ".repeat(column),
        codes::get_category(code.as_str()),
        codes::get_description(code.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_list_and_range() {
        assert_eq!(parse_space("1, 5,9"), Ok(vec![1, 5, 9]));
        assert_eq!(parse_space("2..5"), Ok(vec![2, 3, 4]));
        assert_eq!(parse_space("-2..0"), Ok(vec![-2, -1]));
        assert_eq!(parse_space(""), Ok(vec![]));
        assert!(parse_space("1,x").is_err());
        assert!(parse_space("1..").is_err());
    }

    #[test]
    fn test_diagnostic_points_at_position() {
        let error = GrammarError::invalid_token(5, "x", "i64", "invalid digit found in string");
        let rendered = render_diagnostic("0:[1,x]", &error);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("error[G001]: The value \"x\""));
        assert_eq!(lines[2], "  | 0:[1,x]");
        assert_eq!(lines[3], "  |      ^");
        assert_eq!(
            lines[4],
            "  = Grammar error: Token is neither a placeholder nor accepted by the level converter"
        );
    }

    #[test]
    fn test_diagnostic_at_end_of_input() {
        let error = GrammarError::missing_closers(4, "]", 1);
        let rendered = render_diagnostic("0:[1", &error);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "  |     ^");
        assert_eq!(lines[4], "  = Grammar error: Input ended with strict openers still pending");
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "vartree", "0:[?2]", "--depth", "2", "--space", "0..3", "--space", "0..10", "--seed",
            "7", "--original", "-1", "--json",
        ])
        .unwrap();
        assert_eq!(cli.depth, 2);
        assert_eq!(cli.space, vec!["0..3", "0..10"]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.original, Some(-1));
        assert!(cli.json);
    }
}

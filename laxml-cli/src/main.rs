//! laxml CLI
//!
//! Parses loosely-formed markup and prints it back out, or shows what the
//! parser made of it.

use anyhow::{Result, bail};
use clap::Parser;
use laxml_common::source::load_source;
use laxml_common::warning::warn_once;
use laxml_markup::{Document, NestingMode, ParseIssue, ParseOptions, print_tree, tokenize};
use owo_colors::OwoColorize;

/// laxml: lenient markup parser and pretty-printer
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "laxml")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Re-render a file
    laxml ./page.html

    # Read from stdin
    cat page.html | laxml -

    # Parse inline markup and dump the JSON snapshot
    laxml --json --html '<p class="x">Hello</p>'

    # Show tokens and diagnostics with the legacy closing-tag matcher
    laxml --tokens --issues --nesting legacy ./page.html
"#)]
struct Cli {
    /// Path to a markup file, or `-` for stdin
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<String>,

    /// Parse this markup string instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Closing-tag matching strategy (depth-aware or legacy)
    #[arg(long, value_name = "MODE", default_value_t = NestingMode::DepthAware)]
    nesting: NestingMode,

    /// Print the document snapshot as pretty JSON
    #[arg(long)]
    json: bool,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print an indented debug tree
    #[arg(long)]
    tree: bool,

    /// Print parse diagnostics
    #[arg(long)]
    issues: bool,
}

impl Cli {
    const fn any_view(&self) -> bool {
        self.json || self.tokens || self.tree || self.issues
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let markup = load_markup(&cli)?;

    let options = ParseOptions::new().with_nesting(cli.nesting);
    let (document, issues) = Document::parse_with_issues(&markup, &options);

    if !cli.issues {
        for issue in &issues {
            warn_once("Parser", &issue.to_string());
        }
    }

    if !cli.any_view() {
        println!("{document}");
        return Ok(());
    }

    if cli.tokens {
        print_heading("Tokens");
        for (index, token) in tokenize(&markup).iter().enumerate() {
            println!("{index:>4}  {token}");
        }
    }

    if cli.tree {
        print_heading("Tree");
        print_document(&document);
    }

    if cli.json {
        print_heading("Snapshot");
        println!("{}", serde_json::to_string_pretty(&document.snapshot())?);
    }

    if cli.issues {
        print_heading("Parse Issues");
        print_issues(&issues);
    }

    Ok(())
}

/// Load markup from the CLI arguments.
fn load_markup(cli: &Cli) -> Result<String> {
    if let Some(ref markup) = cli.html {
        Ok(markup.clone())
    } else if let Some(ref path) = cli.path {
        Ok(load_source(path)?)
    } else {
        bail!("no input given: pass a FILE, `-` for stdin, or --html '<markup>'")
    }
}

fn print_heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

fn print_document(document: &Document) {
    if let Some(declaration) = document.declaration() {
        print_tree(declaration, 0);
    }
    print_tree(document.doctype(), 0);
    print_tree(document.root(), 0);
}

fn print_issues(issues: &[ParseIssue]) {
    if issues.is_empty() {
        println!("{}", "no issues".green());
        return;
    }
    for issue in issues {
        println!("  - {issue}");
    }
}

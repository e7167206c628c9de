use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use xmljson::{BuildOptions, ParseOptions, build_with, parse_with};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert XML files to JSON and back", long_about = None)]
struct Cli {
    /// Input file: `.xml` converts to JSON, `.json` converts to XML
    #[arg(value_name = "FILE")]
    file: String,

    /// Root element name to unwrap from parsed XML
    #[arg(long, default_value = "root")]
    root: String,

    /// Emit XML on a single line instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = Utf8PathBuf::from(&cli.file);
    let text = std::fs::read_to_string(path.as_str())
        .with_context(|| format!("Failed to read {}", path))?;

    match path.extension() {
        Some("xml") => {
            let options = ParseOptions {
                root: cli.root,
                ..ParseOptions::default()
            };
            let json = parse_with(&text, &options)
                .with_context(|| format!("Failed to parse {}", path))?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Some("json") => {
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path))?;
            let mut options = BuildOptions::default();
            options.render.pretty = !cli.compact;
            let xml = build_with(&value, &options)
                .with_context(|| format!("Failed to convert {}", path))?;
            println!("{}", xml);
        }
        _ => bail!("Unsupported file extension: {} (expected .xml or .json)", path),
    }
    Ok(())
}

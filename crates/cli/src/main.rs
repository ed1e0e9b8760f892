//! Swagger Type Model CLI
//!
//! Command-line interface for translating Swagger documents into the
//! normalized type model.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use swagger_type_model_common::TranslatorConfig;
use swagger_type_model_parser::{
    translate_document_with_context, Diagnostic, DocumentFormat, SwaggerParser, Translation,
    TranslationContext,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger-type-model")]
#[command(version, about = "Translate Swagger documents into a normalized type model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a document and write the type model as JSON
    #[command(after_help = "EXAMPLES:\n  \
        # Print the model of a JSON document\n  \
        swagger-type-model translate --spec api.json\n\n  \
        # Write the model of a YAML document to a file\n  \
        swagger-type-model translate --spec api.yaml --output model.json\n\n  \
        # Keep the output even when the document has defects\n  \
        swagger-type-model translate --spec api.json --allow-errors")]
    Translate {
        /// Path to the Swagger document
        #[arg(short, long)]
        spec: PathBuf,

        /// Document format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<SpecFormat>,

        /// Translator settings file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum nesting depth of a property, overrides the config file
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit successfully even when defects were found
        #[arg(long)]
        allow_errors: bool,
    },

    /// Check one or more documents and report every defect
    #[command(after_help = "EXAMPLES:\n  \
        # Check a single document\n  \
        swagger-type-model check --specs api.json\n\n  \
        # Check a whole API surface split across files\n  \
        swagger-type-model check --specs folders.json,users.yaml")]
    Check {
        /// Comma-separated list of document paths
        #[arg(short, long, value_delimiter = ',', required = true)]
        specs: Vec<PathBuf>,

        /// Document format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<SpecFormat>,

        /// Translator settings file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum nesting depth of a property, overrides the config file
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpecFormat {
    Json,
    Yaml,
}

impl From<SpecFormat> for DocumentFormat {
    fn from(format: SpecFormat) -> Self {
        match format {
            SpecFormat::Json => DocumentFormat::Json,
            SpecFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

impl std::fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecFormat::Json => write!(f, "json"),
            SpecFormat::Yaml => write!(f, "yaml"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Translate {
            spec,
            format,
            config,
            max_depth,
            output,
            allow_errors,
        } => {
            let config = load_config(config.as_deref(), max_depth)?;
            translate_command(&spec, format, &config, output.as_deref(), allow_errors)
        }
        Commands::Check {
            specs,
            format,
            config,
            max_depth,
        } => {
            let config = load_config(config.as_deref(), max_depth)?;
            check_command(&specs, format, &config)
        }
    }
}

/// Route `log` and `tracing` records to stderr, keeping stdout for the model
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Settings file first, then command-line overrides
fn load_config(path: Option<&Path>, max_depth: Option<usize>) -> Result<TranslatorConfig> {
    let config = match path {
        Some(path) => TranslatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TranslatorConfig::default(),
    };

    match max_depth {
        Some(0) => bail!("--max-depth must be greater than zero"),
        Some(depth) => Ok(config.with_max_depth(depth)),
        None => Ok(config),
    }
}

fn load_document(spec_path: &Path, format: Option<SpecFormat>) -> Result<SwaggerParser> {
    let format = format
        .map(DocumentFormat::from)
        .unwrap_or_else(|| DocumentFormat::detect(spec_path));
    tracing::debug!(?format, path = %spec_path.display(), "loading document");

    SwaggerParser::from_file_with_format(spec_path, format)
        .with_context(|| format!("Failed to load document {}", spec_path.display()))
}

fn translate_command(
    spec_path: &Path,
    format: Option<SpecFormat>,
    config: &TranslatorConfig,
    output: Option<&Path>,
    allow_errors: bool,
) -> Result<()> {
    eprintln!("{} Translating document: {}", "→".cyan(), spec_path.display());

    let parser = load_document(spec_path, format)?;
    let translation = parser.translate(config);
    let json = render_translation(&translation)?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Model written to {}", "→".cyan(), path.display());
        }
        None => println!("{}", json),
    }

    eprintln!(
        "  Schemas: {}, tags: {}, methods: {}",
        translation.schemas.len(),
        translation.paths.len(),
        translation.paths.values().map(Vec::len).sum::<usize>()
    );

    report_diagnostics(&translation.diagnostics);

    if translation.has_errors && !allow_errors {
        bail!(
            "Translation of {} found {} defect(s)",
            spec_path.display(),
            translation.diagnostics.len()
        );
    }

    if !translation.has_errors {
        eprintln!("\n{}", "✓ Translation complete!".green().bold());
    }

    Ok(())
}

fn check_command(
    spec_paths: &[PathBuf],
    format: Option<SpecFormat>,
    config: &TranslatorConfig,
) -> Result<()> {
    eprintln!(
        "{} Checking {} document(s) with max depth {}",
        "→".cyan(),
        spec_paths.len(),
        config.max_depth
    );

    let mut ctx = TranslationContext::new();
    for spec_path in spec_paths {
        let parser = load_document(spec_path, format)?;
        let (schemas, paths) =
            translate_document_with_context(parser.document(), config, &mut ctx);
        eprintln!(
            "  {} {} ({} schemas, {} tags)",
            "•".cyan(),
            spec_path.display(),
            schemas.len(),
            paths.len()
        );
    }

    report_diagnostics(ctx.diagnostics());

    if ctx.has_errors() {
        bail!("Found {} defect(s)", ctx.diagnostics().len());
    }

    eprintln!("\n{}", "✓ No defects found!".green().bold());
    Ok(())
}

fn render_translation(translation: &Translation) -> Result<String> {
    serde_json::to_string_pretty(translation).context("Failed to serialize translation")
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    eprintln!("\n{}", "Diagnostics:".bold());
    for diagnostic in diagnostics {
        eprintln!(
            "  {} [{}] {}",
            "⚠".yellow(),
            format!("{:?}", diagnostic.kind).yellow(),
            diagnostic
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    const DOCUMENT: &str = r##"{
        "paths": {
            "/folders": {
                "post": {
                    "tags": ["Folder"],
                    "x-metadata": {"method": "create"},
                    "requestBody": {"content": {"application/json": {"schema": {
                        "properties": {"name": {"type": "string"}}
                    }}}},
                    "responses": {"200": {"content": {"application/json": {"schema": {
                        "$ref": "#/components/schemas/Folder"
                    }}}}}
                }
            }
        },
        "components": {"schemas": {
            "Folder": {"properties": {"id": {"type": "string", "format": "uuid"}}}
        }}
    }"##;

    fn document_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_specs() {
        let cli = Cli::try_parse_from([
            "swagger-type-model",
            "check",
            "--specs",
            "a.json,b.yaml",
        ])
        .unwrap();

        let Commands::Check { specs, .. } = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(specs, vec![PathBuf::from("a.json"), PathBuf::from("b.yaml")]);
    }

    #[test]
    fn test_load_config_override() {
        let config = load_config(None, Some(8)).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(load_config(None, Some(0)).is_err());
    }

    #[test]
    fn test_load_config_file() {
        let file = document_file("max_depth: 12\n", ".yaml");
        assert_eq!(load_config(Some(file.path()), None).unwrap().max_depth, 12);
        assert_eq!(load_config(Some(file.path()), Some(4)).unwrap().max_depth, 4);
    }

    #[test]
    fn test_translate_writes_output() {
        let spec = document_file(DOCUMENT, ".json");
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("model.json");

        translate_command(
            spec.path(),
            None,
            &TranslatorConfig::default(),
            Some(&output),
            false,
        )
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["has_errors"], false);
        assert!(written["schemas"]["FolderCreateRequest"].is_object());
        assert_eq!(written["paths"]["Folder"][0]["name"], "create");
    }

    #[test]
    fn test_translate_fails_on_defects() {
        let spec = document_file(
            r#"{"components": {"schemas": {"Bad": {"properties": {"x": {}}}}}}"#,
            ".json",
        );
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("model.json");
        let config = TranslatorConfig::default();

        assert!(translate_command(spec.path(), None, &config, Some(&output), false).is_err());
        assert!(translate_command(spec.path(), None, &config, Some(&output), true).is_ok());
    }

    #[test]
    fn test_check_aggregates_documents() {
        let good = document_file(DOCUMENT, ".json");
        let yaml = document_file("paths:\n  /ping:\n    get: {}\n", ".yaml");
        let config = TranslatorConfig::default();

        assert!(check_command(&[good.path().to_path_buf()], None, &config).is_ok());
        assert!(check_command(
            &[good.path().to_path_buf(), yaml.path().to_path_buf()],
            None,
            &config
        )
        .is_err());
    }
}

use clap::Parser;
use quickinfo_html::{parse_json, parse_yaml, RenderError, RenderOptions, Renderer, Value};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

/// Render QuickInfo result documents (JSON or YAML) to HTML
#[derive(Parser, Debug)]
#[command(name = "quickinfo-render", version)]
struct Args {
    /// Result documents to render. Reads JSON from stdin when empty.
    files: Vec<PathBuf>,

    /// Rendering options file (JSON, or YAML by extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spaces per nesting level, overriding the config file
    #[arg(long)]
    indent: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ could not load options:");
            print_error(&e);
            process::exit(1);
        }
    };
    let renderer = Renderer::with_options(options);

    if args.files.is_empty() {
        match render_stdin(&renderer) {
            Ok(html) => print!("{}", html),
            Err(e) => {
                eprintln!("✗ <stdin> has errors:");
                print_error(&e);
                process::exit(1);
            }
        }
        return;
    }

    let mut exit_code = 0;
    for path in &args.files {
        match render_file(&renderer, path) {
            Ok(html) => {
                log::info!("rendered {}", path.display());
                print!("{}", html);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn load_options(args: &Args) -> Result<RenderOptions, RenderError> {
    let mut options = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            if is_yaml(path) {
                RenderOptions::from_yaml(&content)?
            } else {
                RenderOptions::from_json(&content)?
            }
        }
        None => RenderOptions::default(),
    };
    if let Some(width) = args.indent {
        options = options.with_indent_width(width);
    }
    log::debug!("render options: {:?}", options);
    Ok(options)
}

fn render_stdin(renderer: &Renderer) -> Result<String, RenderError> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    renderer.render_object(&parse_json(&content)?)
}

fn render_file(renderer: &Renderer, path: &Path) -> Result<String, RenderError> {
    let content = fs::read_to_string(path)?;
    let value: Value = if is_yaml(path) {
        parse_yaml(&content)?
    } else {
        parse_json(&content)?
    };
    renderer.render_object(&value)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn print_error(error: &RenderError) {
    match error {
        RenderError::UnrenderableValue { path, value } => {
            eprintln!("  Unrenderable value at {}:", path);
            eprintln!("    {} is not a node, a string or a list", value);
        }
        RenderError::InvalidField {
            path,
            field,
            reason,
        } => {
            eprintln!("  Invalid field '{}' at {}:", field, path);
            eprintln!("    {}", reason);
        }
        RenderError::DeserializationError(msg) => {
            eprintln!("  JSON error:");
            eprintln!("    {}", msg);
        }
        RenderError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}

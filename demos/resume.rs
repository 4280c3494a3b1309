use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;
use vitae::{Document, HtmlPolicy, RenderError, Renderer, RendererBuilder};

#[derive(Parser, Debug)]
#[command(version, about = "Render a resume document to an IDF tree", long_about = None)]
struct Args {
    /// Resume document to render
    #[arg(long, default_value = "demos/data/resume.json")]
    input: PathBuf,

    /// Where to write the rendered pages as JSON
    #[arg(long, default_value = "resume.idf.json")]
    output: PathBuf,

    /// Optional render options file
    #[arg(long)]
    options: Option<PathBuf>,

    /// Emit HTML summaries as plain text
    #[arg(long, default_value_t = false)]
    untrusted: bool,

    /// Print the theme's CSS custom properties
    #[arg(long, default_value_t = false)]
    theme: bool,
}

fn main() -> Result<(), RenderError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    println!("Running resume example...");

    let source = fs::read_to_string(&args.input)?;
    let document = Document::from_json(&source)?;
    println!("✓ Document loaded: {}", document.basics.name);

    let mut builder = RendererBuilder::new();
    if let Some(path) = &args.options {
        builder = builder.with_options_file(path)?;
    }
    if args.untrusted {
        builder = builder.with_html_policy(HtmlPolicy::Untrusted);
    }
    let renderer = builder.build();
    println!("✓ Renderer built with '{}' template.", renderer.template_name());

    if let Err(e) = renderer.check_theme(&document) {
        log::warn!("Theme will render without some colors: {}", e);
    }
    if args.theme {
        for (name, value) in renderer.theme_variables(&document) {
            println!("  {}: {};", name, value);
        }
    }

    let pages = renderer.render_document(&document)?;
    fs::write(&args.output, Renderer::to_json(&pages)?)?;

    println!("\nSuccess! Rendered {} page(s) to {}", pages.len(), args.output.display());
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use pagemark::script::parse_script;
use pagemark::{Config, Overlay};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagemark")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAGEMARK_GIT_HASH"), ")"),
    about = "Freehand annotation overlay engine"
)]
struct Cli {
    /// Event script to replay through the overlay (one event per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final surface as a PNG image
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/pagemark/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial surface width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Initial surface height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("pagemark: Freehand annotation overlay engine");
        println!();
        println!("Usage:");
        println!("  pagemark --script events.txt --output page.png");
        println!("  pagemark --help");
        println!();
        println!("Script commands (one per line, '#' starts a comment line):");
        println!("  mode on|off|toggle     Enter/leave writing mode");
        println!("  tool pen|highlighter|eraser");
        println!("  color <name|#rrggbb>");
        println!("  down X Y / move X Y / up");
        println!("  resize W H");
        println!("  close / reopen         Toolbar presence");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    config.validate_and_clamp();

    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let events = parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    log::info!("Replaying {} event(s) from {}", events.len(), script_path.display());

    let mut overlay = Overlay::new(&config).context("Failed to attach overlay")?;
    let repaints = events
        .into_iter()
        .filter(|event| overlay.dispatch(*event))
        .count();
    log::debug!("Surface repainted {repaints} time(s) during replay");

    // Present the store as it ends up, including strokes that never moved.
    overlay.input_mut().redraw();

    let input = overlay.input();
    println!("strokes: {}", input.strokes().len());
    println!(
        "surface: {}x{}",
        input.renderer().width(),
        input.renderer().height()
    );
    println!(
        "writing mode: {}",
        if input.writing_mode() { "on" } else { "off" }
    );
    println!(
        "toolbar: {}",
        if overlay.toolbar_visible() {
            "visible"
        } else {
            "hidden"
        }
    );

    if let Some(output) = cli.output {
        let file = File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        input
            .renderer()
            .write_png(&mut writer)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        log::info!("Saved surface to {}", output.display());
    }

    Ok(())
}

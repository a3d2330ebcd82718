use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use xform2d::desc::{apply_override, load_scene_json, warn_out_of_range};
use xform2d::im::RGBAIm;
use xform2d::params::param_table;
use xform2d::scene::{compute_frame, SceneParams};
use xform2d::{debug_ui, raster};

#[derive(Parser)]
#[command(name = "xform2d")]
#[command(about = "2D affine transforms: pivot rotation preview and matrix inspector", long_about = None)]
#[command(version)]
struct Cli {
    /// Scene JSON file; anything it leaves out takes the default
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    scene: Option<PathBuf>,

    /// Override one parameter, e.g. `--set face.rotation=1.57` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", global = true)]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pivot and face matrices of one frame
    Matrices {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List every parameter with its suggested range and current value
    Params,

    /// Rasterize one frame into a PNG
    Render {
        /// PNG file to write
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        out: PathBuf,

        #[arg(long, default_value_t = 800)]
        width: usize,

        #[arg(long, default_value_t = 600)]
        height: usize,
    },

    /// Open the interactive window
    Ui,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let params = load_params(cli.scene.as_deref(), &cli.overrides)?;

    match cli.command {
        Commands::Matrices { format } => print_matrices(&params, format),
        Commands::Params => {
            print_params(&params);
            Ok(())
        }
        Commands::Render { out, width, height } => render(&params, &out, width, height),
        Commands::Ui => run_ui(params),
    }
}

fn load_params(scene: Option<&Path>, overrides: &[String]) -> anyhow::Result<SceneParams> {
    let mut params = match scene {
        Some(path) => load_scene_json(path)?,
        None => SceneParams::default(),
    };
    for assignment in overrides {
        apply_override(&mut params, assignment)?;
    }
    warn_out_of_range(&params);
    Ok(params)
}

fn print_matrices(params: &SceneParams, format: OutputFormat) -> anyhow::Result<()> {
    let frame = compute_frame(params);
    match format {
        OutputFormat::Text => {
            println!("pivot\n{}", frame.pivot);
            println!("face\n{}", frame.face);
            println!("uniforms (column-major)");
            println!("  pivot: {:?}", frame.pivot.as_cols_array());
            println!("  face:  {:?}", frame.face.as_cols_array());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }
    Ok(())
}

fn print_params(params: &SceneParams) {
    println!(
        "{:<20} {:<8} {:<16} {:>7} {:>7} {:>10}",
        "NAME", "GROUP", "LABEL", "MIN", "MAX", "VALUE"
    );
    for row in param_table(params) {
        let d = row.desc;
        println!(
            "{:<20} {:<8} {:<16} {:>7.2} {:>7.2} {:>10.4}",
            d.name, d.group, d.label, d.min, d.max, row.current
        );
    }
}

fn render(params: &SceneParams, out: &Path, width: usize, height: usize) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("image size must be non-zero, got {width}x{height}");
    }
    let im = raster::render_frame(params, width, height);
    save_png(&im, out)?;
    log::info!("wrote {}x{} frame to {}", width, height, out.display());
    Ok(())
}

#[cfg(feature = "im-io")]
fn save_png(im: &RGBAIm, out: &Path) -> anyhow::Result<()> {
    use anyhow::Context;
    im.save_png(out)
        .with_context(|| format!("failed to write {}", out.display()))
}

#[cfg(not(feature = "im-io"))]
fn save_png(_im: &RGBAIm, _out: &Path) -> anyhow::Result<()> {
    anyhow::bail!("PNG output needs the `im-io` feature")
}

fn run_ui(params: SceneParams) -> anyhow::Result<()> {
    if !debug_ui::ENABLED {
        anyhow::bail!("this build has no window; rebuild with the `debug_ui` feature");
    }

    let last = debug_ui::show(params).map_err(anyhow::Error::msg)?;

    // Print the final state as overrides so it can be replayed with `--set`.
    for row in param_table(&last) {
        println!("--set {}={}", row.desc.name, row.current);
    }
    Ok(())
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use mandelbrot_zoom::{
    DEFAULT_GRID_SIZE, FilePresenterPort, IterationCount, PpmFilePresenter, RenderConfig,
    RenderSession, RenderStrategy, Selection,
};

/// Render the Mandelbrot set, optionally zooming into pixel rectangles.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_zoom", version)]
struct Cli {
    /// Iteration budget per pixel (1 to 8192).
    #[arg(short, long, default_value = "100")]
    iterations: IterationCount,

    /// Zoom rectangle `x1,y1,x2,y2` in grid pixels; repeat to zoom further.
    #[arg(short = 'z', long = "zoom", value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
    zooms: Vec<Selection>,

    /// Width and height of the square output grid.
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: u32,

    /// Render rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Output file (binary PPM).
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            grid_size: self.size,
            strategy: if self.parallel {
                RenderStrategy::Rayon
            } else {
                RenderStrategy::Sequential
            },
            ..RenderConfig::default()
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let session = RenderSession::new(cli.render_config());
    let iterations = i64::from(cli.iterations.get());

    info!(
        "Rendering {}x{} Mandelbrot set, {} iterations",
        cli.size, cli.size, iterations
    );

    let mut frame = session.render_initial(iterations)?;
    info!("Initial render took {:?}", frame.render_duration);

    for selection in &cli.zooms {
        frame = session.render_zoom(*selection, iterations)?;
        info!(
            "Zoom {},{} {}x{} took {:?}",
            selection.left(),
            selection.top(),
            selection.width(),
            selection.height(),
            frame.render_duration
        );
    }

    if let Some(parent) = cli.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    PpmFilePresenter::new().present(&frame.grid, &cli.output)?;
    info!("Saved to {}", cli.output.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    run(&cli).inspect_err(|err| error!("{}", err))
}

use clap::Parser;
use mandelbrot_viewer::{ImageFilePresenter, RenderConfig, SnapshotArgs, SnapshotController};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    mandelbrot_viewer::init_logging();

    match run(SnapshotArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: SnapshotArgs) -> Result<(), Box<dyn Error>> {
    let mut controller = SnapshotController::new(ImageFilePresenter::new());

    controller.generate(args.view.viewport(), RenderConfig::default())?;
    controller.write(&args.output)?;

    Ok(())
}

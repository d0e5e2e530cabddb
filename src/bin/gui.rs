use clap::Parser;
use mandelbrot_viewer::{GuiArgs, PixelsPresenterFactory, RenderConfig, RunGuiCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    mandelbrot_viewer::init_logging();

    let args = GuiArgs::parse();
    let command = RunGuiCommand::new(
        PixelsPresenterFactory::new(),
        args.view.viewport(),
        RenderConfig::default(),
    );

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

mod args;
mod viewer;

use anyhow::{Context, Result};
use args::CliArgs;
use blockflow_config::Config;
use blockflow_engine::{Language, render};
use clap::Parser;
use std::process;
use viewer::Viewer;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            process::exit(code);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let language = Language::from_path(&args.path)?;
    let source = std::fs::read_to_string(&args.path)
        .with_context(|| format!("cannot read '{}'", args.path.display()))?;

    let config = Config::load_or_default().with_context(|| {
        format!(
            "invalid config file '{}'",
            Config::config_path().display()
        )
    })?;
    let render_config = args.apply(config.render);
    log::info!(
        "rendering {} as {language} ({:?})",
        args.path.display(),
        render_config.output
    );

    if args.view {
        let title = args
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return viewer::run(Viewer::new(title, source, language, render_config));
    }

    print!("{}", render(&source, language, &render_config));
    Ok(())
}

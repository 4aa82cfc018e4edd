//! `shadelab RESOURCE_DIR [OFFLINE]`: interactive shading demo window.
//!
//! With a nonzero OFFLINE argument, one frame is rendered, captured to
//! `output.png` and the process exits.

use std::path::{Path, PathBuf};

use shadelab::{options::Options, viewer::Viewer};

#[allow(clippy::print_stdout)]
fn print_usage() {
    println!("Usage: shadelab RESOURCE_DIR [OFFLINE]");
}

/// Offline mode is on when the argument starts with a nonzero integer.
/// Trailing text is ignored ("2abc" is 2, "1.5" is 1); no leading digits
/// counts as 0.
fn parse_offline(arg: Option<&str>) -> bool {
    let Some(arg) = arg else {
        return false;
    };
    let trimmed = arg.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .any(|digit| digit != '0')
}

fn load_options(resource_dir: &Path) -> Options {
    match Options::load_or_default(&resource_dir.join("options.toml")) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("{e}; using default options");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(resource_dir) = args.first().map(PathBuf::from) else {
        print_usage();
        return;
    };
    let offline = parse_offline(args.get(1).map(String::as_str));

    if !resource_dir.is_dir() {
        log::error!(
            "{}",
            shadelab::ShadeError::ResourceDir(resource_dir.clone())
        );
        std::process::exit(1);
    }
    log::info!(
        "resources: {} ({})",
        resource_dir.display(),
        if offline { "offline" } else { "interactive" }
    );

    let options = load_options(&resource_dir);
    let viewer = Viewer::builder()
        .with_resource_dir(resource_dir)
        .with_options(options)
        .offline(offline)
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

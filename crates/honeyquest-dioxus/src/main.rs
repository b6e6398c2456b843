use std::env;
use std::process;

use honeyquest_config::Config;
use honeyquest_dioxus::ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("honeyquest starting up!");

    // fail early on a bad setup instead of launching a dead window
    let server_url = resolve_server_url();
    log::info!("Using backend at {server_url}");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Determine the backend URL from the CLI argument or the config file.
fn resolve_server_url() -> String {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 2 {
        return args[1].clone();
    }

    if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => return config.server_url,
            Ok(None) => {
                eprintln!("Error: No server url provided and no config file found");
                eprintln!("Usage: {} <server-url>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <server-url>", args[0]);
                process::exit(1);
            }
        }
    }

    eprintln!("Usage: {} [server-url]", args[0]);
    process::exit(1);
}

fn app_root() -> dioxus::prelude::Element {
    use dioxus::prelude::*;

    // launch() takes a plain fn, so the url is re-derived here
    let server_url = resolve_server_url();
    let admin_token = env::var("HONEYQUEST_ADMIN_TOKEN").ok();

    rsx! {
        App { server_url, admin_token }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("honeyquest")
        .with_always_on_top(false);

    Config::default().with_window(window)
}

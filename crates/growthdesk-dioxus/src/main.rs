use dioxus::prelude::*;
use growthdesk_config::Config;
use growthdesk_dioxus::ui::App;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("growthdesk starting up");

    // Fail early on an unreadable config file; missing keys only degrade.
    let config = match Config::load() {
        Ok(Some(config)) => config.with_env_overrides(),
        Ok(None) => {
            log::info!(
                "No config file found at {}, using environment variables only",
                Config::config_path().display()
            );
            Config::default().with_env_overrides()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    if config.notion_api_key.is_none() {
        log::warn!("NOTION_API_KEY not set, workspace sections will render empty");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // launch takes a plain function, so the config is resolved again here.
    let config = Config::load()
        .ok()
        .flatten()
        .unwrap_or_default()
        .with_env_overrides();

    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("growthdesk")
        .with_always_on_top(false);

    Config::default().with_window(window)
}

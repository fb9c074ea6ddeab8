//! Entry point: bootstrap the app and look up the given keys.

use std::io::Write;
use std::process::ExitCode;

use i18n_plugin::bootstrap::bootstrap;
use i18n_plugin::config;
use i18n_plugin::plugin::TranslationPlugin;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();

    match run(&paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load settings, bootstrap, then print each requested key (or the whole
/// catalog when none is given).
fn run(paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load_settings(&std::env::current_dir()?)?;

    let app = bootstrap(&settings)?;
    let mut stdout = std::io::stdout().lock();

    if paths.is_empty() {
        let plugin = TranslationPlugin::from_settings(&settings);
        if let Some(provider) = plugin.provider(&app) {
            let mut entries: Vec<_> =
                provider.table().flatten(&settings.key_separator).into_iter().collect();
            entries.sort();
            for (key, value) in entries {
                writeln!(stdout, "{key} = {value}")?;
            }
        }
        return Ok(());
    }

    for path in paths {
        match app.call_global(&settings.global_name, path) {
            Some(value) => writeln!(stdout, "{path} = {value}")?,
            None => writeln!(stdout, "{path} = <missing>")?,
        }
    }

    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nights_supabase::CredentialField;

use crate::error::CliError;

fn mask_value(s: &str) -> String {
    let head: String = s.chars().take(4).collect();
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{head}****")
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_config_show() {
    let path = nights_supabase::config_path();
    let sources = nights_supabase::credential_sources();

    log::info!(
        "{}",
        "Datastore Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let fields = [
        ("url", &sources.url, false),
        ("service_role_key", &sources.service_key, true),
        ("table", &sources.table, false),
    ];
    for (name, field, secret) in fields {
        match shown_value(field, secret) {
            Some(v) => log::info!(
                "  {:<18} {} {}",
                name,
                v,
                format!("({})", field.source).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<18} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.red()),
            ),
        }
    }
}

/// The value to print for a field, masked when secret.
fn shown_value(field: &CredentialField, secret: bool) -> Option<String> {
    let value = field.value.as_deref()?;
    Some(if secret {
        mask_value(value)
    } else {
        value.to_string()
    })
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = nights_supabase::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}

use super::*;

fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |var| {
        pairs
            .iter()
            .find(|(k, _)| *k == var)
            .map(|(_, v)| v.to_string())
    }
}

fn config(url: Option<&str>, key: Option<&str>, table: Option<&str>) -> SupabaseConfig {
    SupabaseConfig {
        url: url.map(String::from),
        service_role_key: key.map(String::from),
        table: table.map(String::from),
    }
}

#[test]
fn env_vars_take_priority_over_config() {
    let env = env_from(&[
        ("SUPABASE_URL", "https://env.supabase.co/"),
        ("SUPABASE_SERVICE_ROLE_KEY", "env-key"),
    ]);
    let creds = Credentials::resolve(
        env,
        Some(config(Some("https://file.supabase.co"), Some("file-key"), Some("films"))),
    )
    .unwrap();

    assert_eq!(creds.url, "https://env.supabase.co");
    assert_eq!(creds.service_key, "env-key");
    assert_eq!(creds.table, "films");
}

#[test]
fn config_file_fills_missing_env() {
    let creds = Credentials::resolve(
        env_from(&[]),
        Some(config(Some("https://file.supabase.co"), Some("file-key"), None)),
    )
    .unwrap();
    assert_eq!(creds.url, "https://file.supabase.co");
    assert_eq!(creds.table, DEFAULT_TABLE);
}

#[test]
fn blank_env_var_is_ignored() {
    let creds = Credentials::resolve(
        env_from(&[("SUPABASE_URL", "  ")]),
        Some(config(Some("https://file.supabase.co"), Some("k"), None)),
    )
    .unwrap();
    assert_eq!(creds.url, "https://file.supabase.co");
}

#[test]
fn missing_url_is_config_error() {
    let err = Credentials::resolve(env_from(&[("SUPABASE_SERVICE_ROLE_KEY", "k")]), None)
        .unwrap_err();
    match err {
        SupabaseError::Config(msg) => assert!(msg.contains("SUPABASE_URL")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_key_is_config_error() {
    let err = Credentials::resolve(env_from(&[("SUPABASE_URL", "https://x.supabase.co")]), None)
        .unwrap_err();
    assert!(matches!(err, SupabaseError::Config(_)));
}

#[test]
fn debug_output_masks_the_key() {
    let creds = Credentials {
        url: "https://x.supabase.co".to_string(),
        service_key: "super-secret".to_string(),
        table: "movies".to_string(),
    };
    assert!(!format!("{creds:?}").contains("super-secret"));
}

#[test]
fn sources_report_provenance() {
    let sources = sources_from(
        env_from(&[("SUPABASE_URL", "https://env.supabase.co")]),
        Some(config(None, Some("file-key"), None)),
    );
    assert_eq!(sources.url.source, CredentialSource::EnvVar("SUPABASE_URL"));
    assert_eq!(sources.service_key.source, CredentialSource::ConfigFile);
    assert_eq!(sources.service_key.value.as_deref(), Some("file-key"));
    assert_eq!(sources.table.source, CredentialSource::Default);
    assert_eq!(sources.table.value.as_deref(), Some(DEFAULT_TABLE));
}

#[test]
fn sources_report_missing() {
    let sources = sources_from(env_from(&[]), None);
    assert_eq!(sources.url.source, CredentialSource::Missing);
    assert!(sources.url.value.is_none());
    assert_eq!(sources.service_key.source, CredentialSource::Missing);
}

#[test]
fn url_set_without_key_still_reports_url() {
    let env = env_from(&[("SUPABASE_URL", "https://abc.supabase.co/")]);
    assert!(Credentials::resolve(&env, None).is_err());

    let sources = sources_from(&env, None);
    assert_eq!(sources.url.value.as_deref(), Some("https://abc.supabase.co"));
    assert_eq!(sources.url.source, CredentialSource::EnvVar("SUPABASE_URL"));
    assert_eq!(sources.service_key.source, CredentialSource::Missing);
    assert!(sources.service_key.value.is_none());
}

#[test]
fn parse_config_reads_supabase_table() {
    let parsed = parse_config(
        r#"
[supabase]
url = "https://file.supabase.co"
service_role_key = "file-key"
"#,
    )
    .unwrap();
    assert_eq!(parsed.url.as_deref(), Some("https://file.supabase.co"));
    assert!(parsed.table.is_none());
}

#[test]
fn parse_config_rejects_garbage() {
    assert!(parse_config("this is = = not toml").is_none());
}

use docquery_api::ApiSettings;

pub struct AppConfig {
    pub api: ApiSettings,
}

/// Builds the runtime configuration. Resolution order for the base URL:
/// built-in default, `.env`, `DOCQUERY_API_URL`, positional CLI argument.
/// Last one wins.
pub fn load() -> AppConfig {
    let _ = dotenv::dotenv();

    let mut api = ApiSettings::default();
    let env_url = std::env::var("DOCQUERY_API_URL").ok();
    let arg_url = std::env::args().nth(1);
    if let Some(url) = resolve_base_url(env_url, arg_url) {
        api.base_url = url;
    }

    AppConfig { api }
}

fn resolve_base_url(env_url: Option<String>, arg_url: Option<String>) -> Option<String> {
    arg_url
        .or(env_url)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

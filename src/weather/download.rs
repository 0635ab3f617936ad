use anyhow::anyhow;

pub fn build_client() -> anyhow::Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("weather-station-enricher")
        .build()?;
    Ok(client)
}

/// Fetch the delimited-text resource at `url` with a single blocking GET.
/// A transport failure or non-success status is an error.
pub fn fetch_delimited_text(
    client: &reqwest::blocking::Client,
    url: &str,
) -> anyhow::Result<String> {
    let response = client.get(url).send()?.error_for_status()?;
    response.text().or(Err(anyhow!("No response text")))
}

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use pasture_core::origins::{summarize_origins, CHART_COUNTRIES, HIGHLIGHT_WORDS};
use pasture_core::{CategoryStat, Insights, OriginSummary, VisibilityRules};
use std::path::{Path, PathBuf};

use crate::app::actions::{read_origins, read_records};
use crate::config::{load_country_aliases, AppConfig};

const HEADLESS_WORDS: usize = 10;

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: &AppConfig, rules: VisibilityRules, json: bool) -> Result<()> {
    let stats = build_headless_stats(config, rules).await?;

    if json {
        render_headless_json(&stats)?;
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

/// Build `country_analysis.json` from `labeled.json` and write it to disk.
pub async fn run_build_origins(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    aliases: Option<PathBuf>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.labeled_path());
    let output = output.unwrap_or_else(|| config.origins_path());
    let aliases = load_country_aliases(aliases.as_deref())?;

    let records = read_records(&input).await?;
    let summary = summarize_origins(&records, &aliases);
    write_summary(&output, &summary).await?;

    tracing::info!(
        output = %output.display(),
        countries = summary.unique_countries,
        mentions = summary.total_mentions,
        "origin summary written"
    );
    println!(
        "Wrote {} countries ({} mentions) to {}",
        summary.unique_countries,
        summary.total_mentions,
        output.display()
    );
    Ok(())
}

async fn write_summary(output: &Path, summary: &OriginSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(output, json)
        .await
        .wrap_err_with(|| format!("Failed to write {}", output.display()))
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nPasture to Plate Insights");
    println!("=========================");
    println!("Generated: {}", stats.generated_at);
    println!("Records: {}", stats.total_records);
    println!("Visible records: {}", stats.visible_records);

    println!("\nCategories:");
    for stat in &stats.categories {
        println!(
            "- {}: {} mentions across {} words",
            stat.label, stat.total_frequency, stat.item_count
        );
    }

    println!("\nTop Words:");
    for word in &stats.top_words {
        println!("- {} ({}) | {}", word.zh, word.en, word.frequency);
    }

    println!("\nTop 100 Categories:");
    for stat in &stats.top_categories {
        println!("- {}: {} words", stat.label, stat.item_count);
    }

    match &stats.origins {
        Ok(origins) => {
            println!("\nOrigins:");
            println!("Total mentions: {}", origins.total_mentions);
            println!("Unique countries: {}", origins.unique_countries);
            for country in &origins.countries {
                println!(
                    "- {}: {} ({:.2}%) | {}",
                    country.name,
                    country.frequency,
                    country.percentage,
                    country.words.join(", ")
                );
            }
        }
        Err(error) => println!("\nOrigins unavailable: {error}"),
    }
}

fn render_headless_json(stats: &HeadlessStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    println!("{json}");
    Ok(())
}

async fn build_headless_stats(config: &AppConfig, rules: VisibilityRules) -> Result<HeadlessStats> {
    let records = read_records(&config.labeled_path()).await?;
    let insights = Insights::new(records, rules);

    // The origin summary is optional: its absence only empties that section.
    let origins = read_origins(&config.origins_path())
        .await
        .map(|summary| HeadlessOrigins::from_summary(&summary))
        .map_err(|error| error.to_string());

    let top_words = insights
        .top()
        .iter()
        .take(HEADLESS_WORDS)
        .map(|record| HeadlessWord {
            zh: record.source_text.clone(),
            en: record.translated_text.clone(),
            frequency: record.frequency,
        })
        .collect();

    Ok(HeadlessStats {
        generated_at: chrono::Local::now().to_rfc3339(),
        total_records: insights.record_count(),
        visible_records: insights
            .visible()
            .iter()
            .filter(|record| !record.labels.is_empty())
            .count(),
        categories: insights.categories().to_vec(),
        top_words,
        top_categories: insights.top_categories().to_vec(),
        origins,
    })
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    generated_at: String,
    total_records: usize,
    visible_records: usize,
    categories: Vec<CategoryStat>,
    top_words: Vec<HeadlessWord>,
    top_categories: Vec<CategoryStat>,
    #[serde(serialize_with = "serialize_origins")]
    origins: std::result::Result<HeadlessOrigins, String>,
}

#[derive(serde::Serialize)]
struct HeadlessWord {
    zh: String,
    en: String,
    frequency: u64,
}

#[derive(serde::Serialize)]
struct HeadlessOrigins {
    total_mentions: u64,
    unique_countries: usize,
    countries: Vec<HeadlessCountry>,
}

#[derive(serde::Serialize)]
struct HeadlessCountry {
    name: String,
    frequency: u64,
    percentage: f64,
    words: Vec<String>,
}

impl HeadlessOrigins {
    fn from_summary(summary: &OriginSummary) -> Self {
        let countries = summary
            .countries
            .iter()
            .take(CHART_COUNTRIES)
            .map(|country| HeadlessCountry {
                name: country.name.clone(),
                frequency: country.frequency,
                percentage: country.percentage,
                words: country
                    .top_words
                    .iter()
                    .take(HIGHLIGHT_WORDS)
                    .map(|word| word.en.clone())
                    .collect(),
            })
            .collect();

        Self {
            total_mentions: summary.total_mentions,
            unique_countries: summary.unique_countries,
            countries,
        }
    }
}

fn serialize_origins<S>(
    origins: &std::result::Result<HeadlessOrigins, String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;

    match origins {
        Ok(origins) => origins.serialize(serializer),
        Err(_) => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasture_core::resources::{LABELED_FILE, ORIGINS_FILE};

    const LABELED: &str = r#"[
        {"zh":"澳洲","en":"Australia","frequency":30,"labels":["origin_country"]},
        {"zh":"悉尼","en":"Sydney","frequency":10,"labels":["city_region"]},
        {"zh":"日本","en":"Japan","frequency":20,"labels":["origin_country","other"]},
        {"zh":"新鲜","en":"fresh","frequency":55,"labels":["freshness"]}
    ]"#;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            data_dir: dir.to_path_buf(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn build_origins_writes_ranked_summary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LABELED_FILE), LABELED).unwrap();
        let config = config_in(dir.path());

        run_build_origins(&config, None, None, None).await.unwrap();

        let body = std::fs::read_to_string(dir.path().join(ORIGINS_FILE)).unwrap();
        let summary: OriginSummary = serde_json::from_str(&body).unwrap();
        assert_eq!(summary.total_mentions, 60);
        assert_eq!(summary.unique_countries, 2);
        assert_eq!(summary.countries[0].name, "Australia");
        assert_eq!(summary.countries[0].frequency, 40);
    }

    #[tokio::test]
    async fn headless_stats_survive_missing_origins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LABELED_FILE), LABELED).unwrap();
        let config = config_in(dir.path());

        let stats = build_headless_stats(&config, VisibilityRules::builtin())
            .await
            .unwrap();

        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.categories[0].label, "freshness");
        assert!(stats.origins.is_err());
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["origins"].is_null());
    }

    #[tokio::test]
    async fn headless_stats_require_records() {
        let dir = tempfile::tempdir().unwrap();

        let result = build_headless_stats(&config_in(dir.path()), VisibilityRules::builtin()).await;

        assert!(result.is_err());
    }
}

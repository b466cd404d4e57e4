use serde::Deserialize;

/// Main configuration structure for wiki-scraper
///
/// Every section has defaults, so an empty file (or no file at all) is a
/// valid configuration targeting minecraft.wiki.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wiki: WikiConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Source wiki configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    /// Prefix that article phrases are appended to
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email", default)]
    pub contact_email: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
            contact_email: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    ///
    /// Format: `Name/Version (+ContactURL; ContactEmail)`, with the
    /// parenthesized part present only when contact details are configured.
    pub fn header_value(&self) -> String {
        let base = format!("{}/{}", self.crawler_name, self.crawler_version);
        let contact: Vec<String> = self
            .contact_url
            .iter()
            .map(|url| format!("+{}", url))
            .chain(self.contact_email.iter().cloned())
            .collect();

        if contact.is_empty() {
            base
        } else {
            format!("{} ({})", base, contact.join("; "))
        }
    }
}

/// Link-graph crawl defaults (overridable from the command line)
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of link hops from the root article
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Seconds to wait between processed articles
    #[serde(rename = "wait-seconds", default = "default_wait_seconds")]
    pub wait_seconds: f64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            wait_seconds: default_wait_seconds(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON word-count store
    #[serde(rename = "word-counts-path", default = "default_word_counts_path")]
    pub word_counts_path: String,

    /// Directory that exported table CSV files are written to
    #[serde(rename = "tables-dir", default = "default_tables_dir")]
    pub tables_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            word_counts_path: default_word_counts_path(),
            tables_dir: default_tables_dir(),
        }
    }
}

/// Relative word frequency analysis configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// JSON object mapping language words to their frequencies; the bundled
    /// English table is used when unset
    #[serde(rename = "reference-path", default)]
    pub reference_path: Option<String>,
}

fn default_base_url() -> String {
    "https://minecraft.wiki/w/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_crawler_name() -> String {
    "wiki-scraper".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_max_depth() -> u32 {
    1
}

fn default_wait_seconds() -> f64 {
    0.1
}

fn default_word_counts_path() -> String {
    "word-counts.json".to_string()
}

fn default_tables_dir() -> String {
    ".".to_string()
}

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobsearch", about = "Job portal search backend")]
pub struct Config {
    /// RapidAPI key for the JSearch provider (skipped when unset)
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,

    /// Base URL of the JSearch API
    #[arg(long, env = "JSEARCH_BASE_URL", default_value = "https://jsearch.p.rapidapi.com")]
    pub jsearch_base_url: String,

    /// Base URL of the Remotive API
    #[arg(long, env = "REMOTIVE_BASE_URL", default_value = "https://remotive.com")]
    pub remotive_base_url: String,

    /// Base URL of the Arbeitnow job board API
    #[arg(long, env = "ARBEITNOW_BASE_URL", default_value = "https://www.arbeitnow.com")]
    pub arbeitnow_base_url: String,

    /// Timeout in seconds for each external provider call
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value = "10")]
    pub provider_timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
        listen_addr: String,
    },
    /// Run a single search and print the response as JSON
    Search {
        /// Search text
        query: String,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        page: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        remote_only: bool,

        #[arg(long)]
        employment_type: Option<String>,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }

    /// The RapidAPI key, treating a blank value as absent.
    pub fn rapidapi_key(&self) -> Option<&str> {
        self.rapidapi_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

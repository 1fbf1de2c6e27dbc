#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Year assumed when completing year-less date tokens like `"15JAN"`.
    /// `None` means the caller decides (the CLI falls back to the current year).
    pub reference_year: Option<i32>,
    /// When true, the CLI treats any paste-parse issue as fatal.
    pub strict: bool,
}

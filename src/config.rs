// src/config.rs
use crate::db::listings::is_plain_stat_key;
use crate::errors::ServerError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::net::SocketAddr;

/// Process-level settings, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub workers: usize,
    /// Directory served under `/static/`.
    pub static_dir: String,
    /// Optional JSON file overriding [`SiteSettings`] defaults.
    pub settings_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "realty.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            workers: 8,
            static_dir: "static".to_string(),
            settings_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("REALTY_ADDR") {
            cfg.addr = addr
                .parse()
                .map_err(|e| ServerError::ConfigError(format!("REALTY_ADDR '{addr}': {e}")))?;
        }
        if let Some(path) = lookup("REALTY_DB") {
            cfg.db_path = path;
        }
        if let Some(path) = lookup("REALTY_SCHEMA") {
            cfg.schema_path = path;
        }
        if let Some(workers) = lookup("REALTY_WORKERS") {
            cfg.workers = workers
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::ConfigError(format!("REALTY_WORKERS '{workers}' is not a positive number"))
                })?;
        }
        if let Some(dir) = lookup("REALTY_STATIC") {
            cfg.static_dir = dir;
        }
        cfg.settings_path = lookup("REALTY_SETTINGS").filter(|p| !p.trim().is_empty());

        Ok(cfg)
    }

    pub fn load_settings(&self) -> Result<SiteSettings, ServerError> {
        match &self.settings_path {
            Some(path) => SiteSettings::from_file(path),
            None => Ok(SiteSettings::default()),
        }
    }
}

/// A label/code pair for enumerated select options (kinds, objectives).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub code: i64,
    pub label: String,
}

impl Choice {
    fn new(code: i64, label: &str) -> Self {
        Self {
            code,
            label: label.to_string(),
        }
    }
}

/// Site-wide content and search configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub agency_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub kinds: Vec<Choice>,
    pub objectives: Vec<Choice>,
    /// Dynamic listing attributes that may be filtered on ("Quartos", ...).
    pub stats_keys: Vec<String>,
    pub per_page: usize,
    /// Used as the price ceiling when there are no listings yet.
    pub fallback_max_price_cents: i64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            agency_name: "Casa Nova Imóveis".to_string(),
            tagline: "Find the place you will call home".to_string(),
            phone: "+55 11 4000-0000".to_string(),
            email: "contato@casanova.example".to_string(),
            address: "Av. Paulista, 1000 - São Paulo".to_string(),
            kinds: vec![
                Choice::new(1, "House"),
                Choice::new(2, "Apartment"),
                Choice::new(3, "Land"),
                Choice::new(4, "Commercial"),
            ],
            objectives: vec![Choice::new(1, "Buy"), Choice::new(2, "Rent")],
            stats_keys: vec![
                "Quartos".to_string(),
                "Suítes".to_string(),
                "Banheiros".to_string(),
                "Vagas".to_string(),
            ],
            per_page: 12,
            fallback_max_price_cents: 500_000_000,
        }
    }
}

impl SiteSettings {
    pub fn from_file(path: &str) -> Result<Self, ServerError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ServerError::ConfigError(format!("read {path}: {e}")))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let settings: SiteSettings = serde_json::from_str(raw)
            .map_err(|e| ServerError::ConfigError(format!("invalid settings JSON: {e}")))?;

        if settings.per_page == 0 {
            return Err(ServerError::ConfigError("per_page must be positive".into()));
        }
        if let Some(key) = settings.stats_keys.iter().find(|k| !is_plain_stat_key(k)) {
            return Err(ServerError::ConfigError(format!(
                "stats key {key:?} must be non-blank without quotes or backslashes"
            )));
        }
        Ok(settings)
    }

    pub fn kind_label(&self, code: i64) -> &str {
        self.kinds
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label.as_str())
            .unwrap_or("Property")
    }

    pub fn objective_label(&self, code: i64) -> &str {
        self.objectives
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label.as_str())
            .unwrap_or("")
    }
}

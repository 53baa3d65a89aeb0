use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub currency_symbol: String,
    pub enable_logging: bool,
    pub scanner_config: ScannerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".to_string(),
            currency_symbol: "₹".to_string(),
            enable_logging: true,
            scanner_config: ScannerConfig::default(),
        }
    }
}

/// Configuración fija del escáner QR (html5-qrcode)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub fps: u32,
    /// Fracción del lado menor del visor usada para el recuadro de captura
    pub qrbox_percent: f64,
    pub facing_mode: String,
    pub remember_last_used_camera: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox_percent: 0.60,
            facing_mode: "environment".to_string(),
            remember_last_used_camera: true,
        }
    }
}

impl ScannerConfig {
    /// Lado del recuadro de captura para un visor de `width` x `height`
    pub fn qrbox_edge(&self, width: f64, height: f64) -> u32 {
        let min_edge = width.min(height).max(0.0);
        (min_edge * self.qrbox_percent).floor() as u32
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            currency_symbol: option_env!("CURRENCY_SYMBOL")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.currency_symbol),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            scanner_config: ScannerConfig {
                fps: parse_or(option_env!("SCANNER_FPS"), defaults.scanner_config.fps),
                qrbox_percent: parse_percent(
                    option_env!("SCANNER_QRBOX_PERCENT"),
                    defaults.scanner_config.qrbox_percent,
                ),
                ..defaults.scanner_config
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

// Acepta 0.6 o 60 (porcentaje); fuera de (0, 1] usa el valor por defecto
fn parse_percent(raw: Option<&str>, default: f64) -> f64 {
    let value: f64 = parse_or(raw, default);
    let value = if value > 1.0 { value / 100.0 } else { value };
    if value > 0.0 && value <= 1.0 {
        value
    } else {
        default
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

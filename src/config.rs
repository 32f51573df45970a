//! Configuração do livefuzz carregada a partir de `livefuzz.toml`.
//!
//! A struct [`LivefuzzConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `LIVEFUZZ_WORKER_URL` tem precedência sobre o arquivo,
//! e as flags da CLI ([`ConfigOverrides`]) têm precedência sobre ambos.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::LivefuzzError;
use crate::job::JobConfig;
use crate::workload::{FundingPolicy, SpamKind};

/// Arquivo lido quando nenhum `--config` é informado.
pub const DEFAULT_CONFIG_FILE: &str = "livefuzz.toml";

/// Variável de ambiente que sobrescreve `worker_url`.
pub const WORKER_URL_ENV: &str = "LIVEFUZZ_WORKER_URL";

/// Configuração de nível superior carregada de `livefuzz.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LivefuzzConfig {
    /// Endereço em que o servidor de controle escuta.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Intervalo, em segundos, entre iterações do job.
    #[serde(default = "default_slot_time_secs")]
    pub slot_time_secs: u64,

    /// Transações por conta; determina o valor distribuído a cada iteração.
    #[serde(default = "default_tx_per_account")]
    pub tx_per_account: u64,

    /// URL base do worker que executa as etapas do job.
    #[serde(default = "default_worker_url")]
    pub worker_url: String,

    /// Tipo de transações enviadas pelo servidor.
    #[serde(default)]
    pub kind: SpamKind,
}

// Valor padrão para o endereço de escuta: todas as interfaces, porta 8080.
fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

// Valor padrão para o intervalo entre iterações: 12s, um slot.
fn default_slot_time_secs() -> u64 {
    12
}

// Valor padrão para transações por conta: 10.
fn default_tx_per_account() -> u64 {
    10
}

// Valor padrão para o worker: porta local.
fn default_worker_url() -> String {
    "http://127.0.0.1:9545".to_string()
}

impl Default for LivefuzzConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            slot_time_secs: default_slot_time_secs(),
            tx_per_account: default_tx_per_account(),
            worker_url: default_worker_url(),
            kind: SpamKind::default(),
        }
    }
}

/// Valores vindos da linha de comando. `None` mantém o valor atual.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen_addr: Option<SocketAddr>,
    pub slot_time_secs: Option<u64>,
    pub tx_per_account: Option<u64>,
    pub worker_url: Option<String>,
    pub kind: Option<SpamKind>,
}

impl LivefuzzConfig {
    /// Carrega a configuração de `path`, ou de `livefuzz.toml` no diretório atual.
    ///
    /// Um caminho explícito inexistente é erro; o arquivo padrão ausente
    /// resulta nos valores padrão.
    pub fn load(path: Option<&Path>) -> Result<Self, LivefuzzError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração.
        config.apply_env(std::env::var(WORKER_URL_ENV).ok());
        Ok(config)
    }

    /// Lê e interpreta um arquivo TOML.
    pub fn from_file(path: &Path) -> Result<Self, LivefuzzError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<LivefuzzConfig>(&contents)?)
    }

    fn apply_env(&mut self, worker_url: Option<String>) {
        if let Some(url) = worker_url.filter(|url| !url.is_empty()) {
            self.worker_url = url;
        }
    }

    /// Aplica as flags da CLI por cima da configuração carregada.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(addr) = overrides.listen_addr {
            self.listen_addr = addr;
        }
        if let Some(secs) = overrides.slot_time_secs {
            self.slot_time_secs = secs;
        }
        if let Some(n) = overrides.tx_per_account {
            self.tx_per_account = n;
        }
        if let Some(url) = overrides.worker_url {
            self.worker_url = url;
        }
        if let Some(kind) = overrides.kind {
            self.kind = kind;
        }
    }

    /// Rejeita valores que deixariam o job inutilizável.
    pub fn validate(&self) -> Result<(), LivefuzzError> {
        if self.slot_time_secs == 0 {
            return Err(LivefuzzError::Config(
                "slot_time_secs must be greater than zero".into(),
            ));
        }
        if !(self.worker_url.starts_with("http://") || self.worker_url.starts_with("https://")) {
            return Err(LivefuzzError::Config(format!(
                "worker_url must be an http(s) URL, got {:?}",
                self.worker_url
            )));
        }
        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_secs(self.slot_time_secs)
    }

    pub fn funding(&self) -> FundingPolicy {
        FundingPolicy::new(self.tx_per_account, self.kind)
    }

    pub fn job_config(&self) -> JobConfig {
        JobConfig {
            pacing: self.pacing(),
            funding: self.funding(),
        }
    }
}

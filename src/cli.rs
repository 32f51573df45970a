//! Interface de linha de comando do livefuzz baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (server, spam, blobs,
//! create, unstuck, airdrop) e flags globais que sobrescrevem o `livefuzz.toml`.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;
use crate::workload::SpamKind;

/// livefuzz — plano de controle para um fuzzer de transações ao vivo.
#[derive(Debug, Parser)]
#[command(name = "livefuzz", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho para o arquivo de configuração (padrão: ./livefuzz.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL base do worker que executa as etapas do job.
    #[arg(long, global = true)]
    pub worker_url: Option<String>,

    /// Segundos de espera entre iterações.
    #[arg(long, global = true)]
    pub slot_time: Option<u64>,

    /// Transações por conta a cada iteração.
    #[arg(long, global = true)]
    pub tx_per_account: Option<u64>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Tipo de spam aceito pela CLI, mapeado para [`SpamKind`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Transações comuns.
    Basic,
    /// Transações com blobs.
    Blobs,
}

impl From<KindArg> for SpamKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Basic => SpamKind::Basic,
            KindArg::Blobs => SpamKind::Blobs,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inicia o servidor de controle (start/stop/health).
    Server {
        /// Endereço de escuta, ex.: 0.0.0.0:8080.
        #[arg(long)]
        listen: Option<SocketAddr>,

        /// Tipo de transações enviadas pelo job.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Envia transações comuns em primeiro plano até Ctrl-C.
    Spam,

    /// Envia transações com blobs em primeiro plano até Ctrl-C.
    Blobs,

    /// Cria contas efêmeras no worker.
    Create {
        /// Quantidade de contas a criar.
        #[arg(long, default_value_t = 100)]
        count: u64,
    },

    /// Executa apenas a etapa de preparação das contas.
    Unstuck,

    /// Distribui fundos uma única vez.
    Airdrop,
}

impl Cli {
    /// Flags que sobrescrevem a configuração carregada do arquivo.
    pub fn overrides(&self) -> ConfigOverrides {
        let (listen_addr, kind) = match &self.command {
            Command::Server { listen, kind } => (*listen, kind.map(SpamKind::from)),
            Command::Spam => (None, Some(SpamKind::Basic)),
            Command::Blobs => (None, Some(SpamKind::Blobs)),
            Command::Create { .. } | Command::Unstuck | Command::Airdrop => (None, None),
        };

        ConfigOverrides {
            listen_addr,
            slot_time_secs: self.slot_time,
            tx_per_account: self.tx_per_account,
            worker_url: self.worker_url.clone(),
            kind,
        }
    }
}

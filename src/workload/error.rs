//! Tipos de erro para as etapas de trabalho delegadas ao worker externo.
//!
//! Define [`WorkloadError`] com variantes para respostas HTTP de erro e
//! falhas de rede. Usa `thiserror` para derivar `Display` e `Error`
//! automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao executar uma etapa do workload.
///
/// - [`Status`](WorkloadError::Status) — o worker respondeu com status não-2xx
/// - [`Network`](WorkloadError::Network) — falha na camada de rede
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// O worker rejeitou a requisição (ex.: 500 erro interno, 503 indisponível).
    /// Contém o código de status HTTP e o corpo da resposta.
    #[error("worker returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

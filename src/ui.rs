//! Interface de terminal do livefuzz — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`RunProgress`] acompanha visualmente
//! a execução do job em primeiro plano (`livefuzz spam` / `livefuzz blobs`).

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::JobError;
use crate::job::RunReport;

/// Indicador visual de progresso para um job em primeiro plano.
///
/// Exibe um spinner animado enquanto o loop roda e mensagens
/// coloridas para parada limpa (verde) e falha (vermelho).
pub struct RunProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de sucesso.
    green: Style,
    // Estilo vermelho para mensagens de falha.
    red: Style,
    // Estilo amarelo para avisos.
    yellow: Style,
}

impl RunProgress {
    /// Inicia o spinner com a descrição do job e retorna a instância de progresso.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(description.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Avisa que o sinal de parada foi recebido; o loop termina na próxima fronteira.
    pub fn stopping(&self) {
        self.pb.println(format!(
            "  {} Stop requested, finishing current iteration",
            self.yellow.apply_to("↻")
        ));
    }

    /// Finaliza o spinner e exibe o resultado final do job.
    ///
    /// Em caso de falha só o marcador é impresso; o erro em si sobe para
    /// `main` e é exibido uma única vez.
    pub fn complete(&self, result: &Result<RunReport, JobError>) {
        self.pb.finish_and_clear();
        println!("{}", self.outcome(result));
    }

    fn outcome(&self, result: &Result<RunReport, JobError>) -> String {
        match result {
            Ok(report) => format!(
                "  {} Spam stopped after {} iterations",
                self.green.apply_to("✓"),
                report.iterations
            ),
            Err(_) => format!("  {} Spam failed", self.red.apply_to("✗")),
        }
    }

    /// Imprime o relatório da execução formatado em JSON.
    pub fn print_report(&self, report: &RunReport) {
        println!();
        println!("{}", self.green.apply_to("─── Run Report ───"));
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_default()
        );
    }
}

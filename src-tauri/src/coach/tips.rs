//! Format-specific guidance shown next to the generated prompt.

use crate::coach::format::OutputFormat;

/// Two short tips per output format. Display-only; the builder never
/// consumes these.
pub fn tips_for(formato: OutputFormat) -> [&'static str; 2] {
    match formato {
        OutputFormat::Lista => [
            "Peça número de itens e ordem lógica.",
            "Inclua critérios de avaliação se estiver comparando opções.",
        ],
        OutputFormat::PassoAPasso => [
            "Exija passos numerados e pré-condições.",
            "Peça validação do resultado de cada passo.",
        ],
        OutputFormat::Tabela => [
            "Defina colunas e linhas esperadas.",
            "Peça CSV/Markdown para fácil cópia.",
        ],
        OutputFormat::Texto => [
            "Defina o tamanho e o público-alvo.",
            "Solicite resumo final com bullets.",
        ],
    }
}

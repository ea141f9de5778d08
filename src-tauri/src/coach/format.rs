use serde::{Deserialize, Serialize};

/// Output shape requested for the generated content. Closed set: the UI
/// select is the only producer, and unknown literals are rejected at the
/// command edge before a value ever reaches the builder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[serde(rename = "lista")]
    Lista,
    #[serde(rename = "passo-a-passo")]
    PassoAPasso,
    #[serde(rename = "tabela")]
    Tabela,
    #[serde(rename = "texto")]
    Texto,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Lista,
        OutputFormat::PassoAPasso,
        OutputFormat::Tabela,
        OutputFormat::Texto,
    ];

    /// Raw literal, exactly as interpolated into the generated prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Lista => "lista",
            OutputFormat::PassoAPasso => "passo-a-passo",
            OutputFormat::Tabela => "tabela",
            OutputFormat::Texto => "texto",
        }
    }

    /// Label shown by the format selector. Display-only, never part of
    /// the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Lista => "Lista",
            OutputFormat::PassoAPasso => "Passo a passo",
            OutputFormat::Tabela => "Tabela (se fizer sentido)",
            OutputFormat::Texto => "Texto corrido",
        }
    }

    pub async fn select(formato: &str) -> Result<Self, String> {
        match formato {
            "lista" => Ok(OutputFormat::Lista),
            "passo-a-passo" => Ok(OutputFormat::PassoAPasso),
            "tabela" => Ok(OutputFormat::Tabela),
            "texto" => Ok(OutputFormat::Texto),
            _ => Err("Invalid format selected!".to_string()),
        }
    }
}

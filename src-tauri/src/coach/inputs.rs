use serde::{Deserialize, Serialize};

use crate::coach::format::OutputFormat;

/// The coach form record. One value per session; every edit swaps in a
/// whole new record with exactly one field changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptInputs {
    pub objetivo: String,
    pub contexto: String,
    pub publico: String,
    pub estilo: String,
    pub tom: String,
    pub formato: OutputFormat,
    pub idioma: String,
    pub limites: String,
}

impl Default for PromptInputs {
    fn default() -> Self {
        Self {
            objetivo: "explicar IA generativa para iniciantes".to_string(),
            contexto: "palestra de 10 minutos para equipe de produto".to_string(),
            publico: "pessoas não técnicas".to_string(),
            estilo: "claro e direto, com exemplos práticos".to_string(),
            tom: "amigável e encorajador".to_string(),
            formato: OutputFormat::Lista,
            idioma: "pt-BR".to_string(),
            limites: "até 300 palavras, evitar jargões".to_string(),
        }
    }
}

/// Free-text fields addressable from the UI. `formato` is set through
/// `OutputFormat::select` instead and deliberately has no variant here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Objetivo,
    Contexto,
    Publico,
    Estilo,
    Tom,
    Idioma,
    Limites,
}

impl PromptInputs {
    /// New record with one free-text field replaced, all others carried
    /// over unchanged. Empty strings are accepted; there is no
    /// required-field validation.
    pub fn with_text(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Objetivo => next.objetivo = value,
            Field::Contexto => next.contexto = value,
            Field::Publico => next.publico = value,
            Field::Estilo => next.estilo = value,
            Field::Tom => next.tom = value,
            Field::Idioma => next.idioma = value,
            Field::Limites => next.limites = value,
        }
        next
    }

    /// New record with the output format replaced.
    pub fn with_format(&self, formato: OutputFormat) -> Self {
        Self {
            formato,
            ..self.clone()
        }
    }
}

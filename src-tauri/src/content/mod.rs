//! Static guide content: tabs, sections, example prompts and FAQ.
//!
//! The tables live as TOML documents embedded at compile time and are
//! parsed once during startup. Nothing here mutates after load.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
}

/// Navigation tabs, in display order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[serde(rename = "inicio")]
    Inicio,
    #[serde(rename = "boas-praticas")]
    BoasPraticas,
    #[serde(rename = "exemplos")]
    Exemplos,
    #[serde(rename = "faq")]
    Faq,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Inicio, Tab::BoasPraticas, Tab::Exemplos, Tab::Faq];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Inicio => "inicio",
            Tab::BoasPraticas => "boas-praticas",
            Tab::Exemplos => "exemplos",
            Tab::Faq => "faq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Inicio => "Início",
            Tab::BoasPraticas => "Boas práticas",
            Tab::Exemplos => "Exemplos",
            Tab::Faq => "FAQ",
        }
    }
}

/// One titled block inside a guide tab: a paragraph, a bullet list, or both.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Section {
    pub titulo: String,
    #[serde(default)]
    pub corpo: Option<String>,
    #[serde(default)]
    pub itens: Vec<String>,
}

/// A ready-made prompt template with `{placeholder}` slots, shown verbatim.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExamplePrompt {
    pub titulo: String,
    pub prompt: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FaqEntry {
    pub pergunta: String,
    pub resposta: String,
}

/// Payload handed to the UI for one tab.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TabContent {
    Sections(Vec<Section>),
    Exemplos(Vec<ExamplePrompt>),
    Faq(Vec<FaqEntry>),
}

#[derive(Deserialize)]
struct SectionsDoc {
    section: Vec<Section>,
}

#[derive(Deserialize)]
struct ExemplosDoc {
    exemplo: Vec<ExamplePrompt>,
}

#[derive(Deserialize)]
struct FaqDoc {
    faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone)]
pub struct ContentCollection {
    pub inicio: Vec<Section>,
    pub boas_praticas: Vec<Section>,
    pub exemplos: Vec<ExamplePrompt>,
    pub faq: Vec<FaqEntry>,
}

impl ContentCollection {
    pub fn load() -> anyhow::Result<Self> {
        let inicio: SectionsDoc = parse("inicio.toml", include_str!("../../content/inicio.toml"))?;
        let boas_praticas: SectionsDoc = parse(
            "boas_praticas.toml",
            include_str!("../../content/boas_praticas.toml"),
        )?;
        let exemplos: ExemplosDoc =
            parse("exemplos.toml", include_str!("../../content/exemplos.toml"))?;
        let faq: FaqDoc = parse("faq.toml", include_str!("../../content/faq.toml"))?;

        Ok(Self {
            inicio: inicio.section,
            boas_praticas: boas_praticas.section,
            exemplos: exemplos.exemplo,
            faq: faq.faq,
        })
    }

    /// Content for one navigation tab.
    pub fn tab(&self, tab: Tab) -> TabContent {
        match tab {
            Tab::Inicio => TabContent::Sections(self.inicio.clone()),
            Tab::BoasPraticas => TabContent::Sections(self.boas_praticas.clone()),
            Tab::Exemplos => TabContent::Exemplos(self.exemplos.clone()),
            Tab::Faq => TabContent::Faq(self.faq.clone()),
        }
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, ContentError> {
    toml::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

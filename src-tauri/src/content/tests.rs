//! Unit tests for the embedded guide content.

use super::*;

#[test]
fn embedded_tables_parse() {
    let content = ContentCollection::load().unwrap();
    assert_eq!(content.inicio.len(), 3);
    assert_eq!(content.boas_praticas.len(), 3);
    assert_eq!(content.exemplos.len(), 4);
    assert_eq!(content.faq.len(), 3);
}

#[test]
fn inicio_mixes_paragraphs_and_lists() {
    let content = ContentCollection::load().unwrap();
    let first = &content.inicio[0];
    assert!(first.corpo.is_some());
    assert!(first.itens.is_empty());
    let second = &content.inicio[1];
    assert!(second.corpo.is_none());
    assert_eq!(second.itens.len(), 4);
}

#[test]
fn tabs_map_to_their_payload() {
    let content = ContentCollection::load().unwrap();
    assert!(matches!(content.tab(Tab::Inicio), TabContent::Sections(s) if s.len() == 3));
    assert!(matches!(content.tab(Tab::BoasPraticas), TabContent::Sections(_)));
    assert!(matches!(content.tab(Tab::Exemplos), TabContent::Exemplos(e) if e.len() == 4));
    assert!(matches!(content.tab(Tab::Faq), TabContent::Faq(f) if f.len() == 3));
}

#[test]
fn example_prompts_keep_their_placeholders() {
    let content = ContentCollection::load().unwrap();
    for exemplo in &content.exemplos {
        assert!(
            exemplo.prompt.contains('{') && exemplo.prompt.contains('}'),
            "{} lost its placeholders",
            exemplo.titulo
        );
    }
}

#[test]
fn tab_ids_are_stable() {
    let ids: Vec<_> = Tab::ALL.iter().map(|tab| tab.id()).collect();
    assert_eq!(ids, ["inicio", "boas-praticas", "exemplos", "faq"]);
    for tab in Tab::ALL {
        let json = serde_json::to_string(&tab).unwrap();
        assert_eq!(json, format!("\"{}\"", tab.id()));
    }
}

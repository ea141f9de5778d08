//! Renders the coach form into a single LLM-ready instruction.

use crate::coach::inputs::PromptInputs;

/// Build the final prompt for the LLM.
///
/// Pure and total: the same record always renders the same string, and an
/// all-empty record still yields the connective skeleton. Clause order is
/// a contract; users paste the result verbatim into other tools.
pub fn build(inputs: &PromptInputs) -> String {
    format!(
        "Atue como um especialista no assunto. \
         Objetivo: {objetivo}. \
         Contexto: {contexto}. \
         Público-alvo: {publico}. \
         Estilo desejado: {estilo}. Tom: {tom}. \
         Formato de saída: {formato}. Idioma: {idioma}. \
         Respeite estes limites: {limites}. \
         Explique o raciocínio passo a passo apenas se for útil e mantenha a resposta precisa.",
        objetivo = inputs.objetivo,
        contexto = inputs.contexto,
        publico = inputs.publico,
        estilo = inputs.estilo,
        tom = inputs.tom,
        formato = inputs.formato.as_str(),
        idioma = inputs.idioma,
        limites = inputs.limites,
    )
}

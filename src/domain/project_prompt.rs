//! Project prompt compiler: brand identity + methodology into a text block.

use super::fields::{non_blank, non_blank_list, section};
use super::project::{ProjectIdentity, ProjectMethodology};

/// Section title for the brand identity block.
pub const IDENTITY_TITLE: &str = "IDENTIDADE DA MARCA";
/// Section title for the methodology block.
pub const METHODOLOGY_TITLE: &str = "METODOLOGIA E MECANISMO ÚNICO";

/// Compile the project-level prompt block.
///
/// Emits the identity and methodology sections, in that order, skipping any
/// section whose record is absent or entirely blank. Returns an empty string
/// when there is nothing to say; never emits an empty header.
pub fn compile_project_prompt(
    identity: Option<&ProjectIdentity>,
    methodology: Option<&ProjectMethodology>,
) -> String {
    let mut sections = Vec::new();

    if let Some(identity) = identity
        && let Some(body) = identity_body(identity)
    {
        sections.push(section(IDENTITY_TITLE, &body));
    }

    if let Some(methodology) = methodology
        && let Some(body) = methodology_body(methodology)
    {
        sections.push(section(METHODOLOGY_TITLE, &body));
    }

    sections.join("\n\n")
}

fn identity_body(identity: &ProjectIdentity) -> Option<String> {
    let mut lines = Vec::new();

    if let Some(value) = non_blank(&identity.brand_name) {
        lines.push(format!("Marca: {value}"));
    }
    if let Some(value) = non_blank(&identity.central_purpose) {
        lines.push(format!("Propósito central: {value}"));
    }
    if let Some(value) = non_blank(&identity.sector) {
        lines.push(format!("Setor: {value}"));
    }
    if let Some(values) = non_blank_list(&identity.brand_personality) {
        lines.push(format!("Personalidade da marca: {}", values.join(", ")));
    }
    if let Some(values) = non_blank_list(&identity.voice_tones) {
        lines.push(format!("Tom de voz: {}", values.join(", ")));
    }
    if let Some(values) = non_blank_list(&identity.keywords) {
        lines.push(format!("Palavras-chave: {}", values.join(", ")));
    }

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

fn methodology_body(methodology: &ProjectMethodology) -> Option<String> {
    let labeled: [(&str, &Option<String>); 10] = [
        ("Nome do método", &methodology.name),
        ("Tese central", &methodology.tese_central),
        ("Mecanismo primário", &methodology.mecanismo_primario),
        ("Por que funciona", &methodology.por_que_funciona),
        ("Erro invisível", &methodology.erro_invisivel),
        ("Diferenciação", &methodology.diferenciacao),
        ("Princípios e fundamentos", &methodology.principios_fundamentos),
        ("Etapas do método", &methodology.etapas_metodo),
        ("Transformação real", &methodology.transformacao_real),
        ("Prova de funcionamento", &methodology.prova_funcionamento),
    ];

    let paragraphs: Vec<String> = labeled
        .into_iter()
        .filter_map(|(label, field)| non_blank(field).map(|value| format!("{label}: {value}")))
        .collect();

    if paragraphs.is_empty() { None } else { Some(paragraphs.join("\n\n")) }
}

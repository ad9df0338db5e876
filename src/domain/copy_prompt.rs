//! Copy prompt compiler: brief, audience and offer into a text block.

use super::catalogs;
use super::copy_brief::{AudienceSegment, CopyBrief, Offer};
use super::fields::{bulleted, non_blank, non_blank_list, section};

/// Separator between combined style instructions.
const STYLE_SEPARATOR: &str = "\n\n---\n\n";

/// Compile the copy-level prompt block.
///
/// Section order is fixed: type, structure, audience, offer, objective,
/// styles, emotional focus. Every section except the copy type depends on its
/// own field being present; the copy type section is emitted for any
/// non-blank `copy_type`. Omitted sections leave no residue.
pub fn compile_copy_prompt(
    brief: &CopyBrief,
    audience: Option<&AudienceSegment>,
    offer: Option<&Offer>,
) -> String {
    let mut sections = Vec::new();

    if let Some(code) = non_blank(&brief.copy_type) {
        sections.push(section("TIPO DE COPY", &catalogs::copy_type_instruction(code)));
    }

    if let Some(code) = non_blank(&brief.framework) {
        sections.push(section("ESTRUTURA DA COPY", &catalogs::framework_instruction(code)));
    }

    if let Some(audience) = audience
        && let Some(body) = audience_body(audience)
    {
        sections.push(section("PÚBLICO-ALVO", &body));
    }

    if let Some(offer) = offer
        && let Some(body) = offer_body(offer)
    {
        sections.push(section("OFERTA", &body));
    }

    if let Some(code) = non_blank(&brief.objective) {
        sections.push(section("OBJETIVO DA COPY", &catalogs::objective_instruction(code)));
    }

    if let Some(styles) = non_blank_list(&brief.styles) {
        let body: Vec<String> =
            styles.iter().map(|tag| catalogs::style_instruction(tag)).collect();
        sections.push(section("ESTILO DE COPY", &body.join(STYLE_SEPARATOR)));
    }

    if let Some(code) = non_blank(&brief.emotional_focus) {
        sections.push(section("FOCO EMOCIONAL", &catalogs::emotional_focus_instruction(code)));
    }

    sections.join("\n\n")
}

fn audience_body(audience: &AudienceSegment) -> Option<String> {
    let mut lines = Vec::new();

    if let Some(value) = non_blank(&audience.name) {
        lines.push(format!("Segmento: {value}"));
    }
    if let Some(value) = non_blank(&audience.description) {
        lines.push(format!("Descrição: {value}"));
    }
    if let Some(demographics) = &audience.demographics {
        let values = demographics.present_values();
        if !values.is_empty() {
            lines.push(format!("Demografia: {}", values.join(", ")));
        }
    }
    if let Some(items) = non_blank_list(&audience.pain_points) {
        lines.push(bulleted("Dores e frustrações", &items));
    }
    if let Some(items) = non_blank_list(&audience.desires) {
        lines.push(bulleted("Desejos e aspirações", &items));
    }

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

fn offer_body(offer: &Offer) -> Option<String> {
    let mut lines = Vec::new();

    if let Some(value) = non_blank(&offer.name) {
        lines.push(format!("Nome da oferta: {value}"));
    }
    if let Some(value) = non_blank(&offer.description) {
        lines.push(format!("Descrição: {value}"));
    }
    if let Some(value) = non_blank(&offer.value_proposition) {
        lines.push(format!("Proposta de valor: {value}"));
    }
    if let Some(value) = non_blank(&offer.main_benefit) {
        lines.push(format!("Benefício principal: {value}"));
    }
    if let Some(items) = non_blank_list(&offer.secondary_benefits) {
        lines.push(bulleted("Benefícios secundários", &items));
    }
    if let Some(items) = non_blank_list(&offer.differentials) {
        lines.push(bulleted("Diferenciais", &items));
    }

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(copy_type: &str) -> CopyBrief {
        CopyBrief { copy_type: Some(copy_type.to_string()), ..Default::default() }
    }

    #[test]
    fn type_only_brief_emits_single_section() {
        let prompt = compile_copy_prompt(&brief("landing_page"), None, None);
        assert!(prompt.starts_with("## TIPO DE COPY\n"));
        for header in
            ["ESTRUTURA", "PÚBLICO-ALVO", "OFERTA", "OBJETIVO", "ESTILO", "FOCO EMOCIONAL"]
        {
            assert!(!prompt.contains(header), "unexpected section {header}");
        }
    }

    #[test]
    fn blank_copy_type_emits_nothing() {
        let empty = CopyBrief { copy_type: Some("  ".to_string()), ..Default::default() };
        assert_eq!(compile_copy_prompt(&empty, None, None), "");
    }

    #[test]
    fn sections_keep_fixed_order() {
        let full = CopyBrief {
            copy_type: Some("email".to_string()),
            framework: Some("aida".to_string()),
            objective: Some("venda_direta".to_string()),
            styles: vec!["storytelling".to_string()],
            emotional_focus: Some("desejo".to_string()),
        };
        let audience = AudienceSegment {
            name: Some("infoprodutores".to_string()),
            ..Default::default()
        };
        let offer = Offer { name: Some("Mentoria Alfa".to_string()), ..Default::default() };

        let prompt = compile_copy_prompt(&full, Some(&audience), Some(&offer));
        let positions: Vec<usize> = [
            "## TIPO DE COPY",
            "## ESTRUTURA DA COPY",
            "## PÚBLICO-ALVO",
            "## OFERTA",
            "## OBJETIVO DA COPY",
            "## ESTILO DE COPY",
            "## FOCO EMOCIONAL",
        ]
        .iter()
        .map(|header| prompt.find(header).unwrap_or_else(|| panic!("missing {header}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn audience_with_only_blank_fields_emits_no_section() {
        let audience = AudienceSegment {
            name: Some("  ".to_string()),
            pain_points: vec![String::new()],
            ..Default::default()
        };
        let prompt = compile_copy_prompt(&brief("email"), Some(&audience), None);
        assert!(!prompt.contains("PÚBLICO-ALVO"));
    }

    #[test]
    fn audience_lists_render_as_bullets() {
        let audience = AudienceSegment {
            name: Some("infoprodutores".to_string()),
            pain_points: vec!["pouco tempo".to_string(), "tráfego caro".to_string()],
            ..Default::default()
        };
        let prompt = compile_copy_prompt(&brief("email"), Some(&audience), None);
        assert!(prompt.contains("Dores e frustrações:\n- pouco tempo\n- tráfego caro"));
    }

    #[test]
    fn styles_join_with_rule_and_unknown_tags_pass_through() {
        let styled = CopyBrief {
            copy_type: Some("anuncio".to_string()),
            styles: vec!["storytelling".to_string(), "tom_xyz".to_string()],
            ..Default::default()
        };
        let prompt = compile_copy_prompt(&styled, None, None);
        assert!(prompt.contains("\n\n---\n\ntom_xyz"));
        assert!(prompt.contains("storytelling como espinha dorsal"));
    }

    #[test]
    fn no_stray_separators_between_sections() {
        let sparse = CopyBrief {
            copy_type: Some("email".to_string()),
            emotional_focus: Some("dor".to_string()),
            ..Default::default()
        };
        let prompt = compile_copy_prompt(&sparse, None, None);
        assert!(!prompt.contains("\n\n\n"));
        assert_eq!(prompt, prompt.trim());
    }

    #[test]
    fn compilation_is_deterministic() {
        let full = CopyBrief {
            copy_type: Some("vsl".to_string()),
            styles: vec!["urgente".to_string(), "dados".to_string()],
            ..Default::default()
        };
        assert_eq!(
            compile_copy_prompt(&full, None, None),
            compile_copy_prompt(&full, None, None),
        );
    }
}

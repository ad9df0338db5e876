//! Project-level configuration records: brand identity and methodology.

use serde::Deserialize;

use super::fields::non_blank;

/// Brand identity fields of a project. All optional; any non-blank field
/// makes the record non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectIdentity {
    pub brand_name: Option<String>,
    pub central_purpose: Option<String>,
    pub sector: Option<String>,
    #[serde(default)]
    pub brand_personality: Vec<String>,
    #[serde(default)]
    pub voice_tones: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ProjectIdentity {
    pub fn is_empty(&self) -> bool {
        non_blank(&self.brand_name).is_none()
            && non_blank(&self.central_purpose).is_none()
            && non_blank(&self.sector).is_none()
            && self.brand_personality.iter().all(|v| v.trim().is_empty())
            && self.voice_tones.iter().all(|v| v.trim().is_empty())
            && self.keywords.iter().all(|v| v.trim().is_empty())
    }
}

/// Methodology and unique-mechanism fields of a project.
///
/// Field names mirror the product vocabulary used across the CopyDrive
/// workspace records, so the wire shape deserializes without renames.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectMethodology {
    pub name: Option<String>,
    pub tese_central: Option<String>,
    pub mecanismo_primario: Option<String>,
    pub por_que_funciona: Option<String>,
    pub erro_invisivel: Option<String>,
    pub diferenciacao: Option<String>,
    pub principios_fundamentos: Option<String>,
    pub etapas_metodo: Option<String>,
    pub transformacao_real: Option<String>,
    pub prova_funcionamento: Option<String>,
}

impl ProjectMethodology {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.tese_central,
            &self.mecanismo_primario,
            &self.por_que_funciona,
            &self.erro_invisivel,
            &self.diferenciacao,
            &self.principios_fundamentos,
            &self.etapas_metodo,
            &self.transformacao_real,
            &self.prova_funcionamento,
        ]
        .into_iter()
        .all(|field| non_blank(field).is_none())
    }
}

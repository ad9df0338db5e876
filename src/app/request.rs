//! Wire-shaped generation request, shared by the HTTP handler and the CLI.

use serde::Deserialize;

use crate::domain::{AudienceSegment, CopyBrief, Offer, ProjectIdentity, ProjectMethodology};

/// One generation request as the clients send it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub brief: CopyBrief,
    pub project_identity: Option<ProjectIdentity>,
    pub methodology: Option<ProjectMethodology>,
    pub audience_segment: Option<AudienceSegment>,
    pub offer: Option<Offer>,
    pub copy_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_the_full_wire_shape() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "copyType": "email",
                "objective": "venda_direta",
                "styles": ["storytelling"],
                "projectIdentity": {"brand_name": "Acme"},
                "audienceSegment": {"name": "infoprodutores"},
                "copyId": "copy-42"
            }"#,
        )
        .unwrap();

        assert_eq!(request.brief.copy_type.as_deref(), Some("email"));
        assert_eq!(request.brief.objective.as_deref(), Some("venda_direta"));
        assert_eq!(
            request.project_identity.as_ref().unwrap().brand_name.as_deref(),
            Some("Acme"),
        );
        assert_eq!(request.audience_segment.as_ref().unwrap().name.as_deref(), Some("infoprodutores"));
        assert_eq!(request.copy_id.as_deref(), Some("copy-42"));
        assert!(request.offer.is_none());
        assert!(request.methodology.is_none());
    }

    #[test]
    fn empty_body_is_a_valid_request() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.brief.copy_type.is_none());
        assert!(request.copy_id.is_none());
    }
}

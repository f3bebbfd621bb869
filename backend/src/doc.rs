//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::health::ApiHealthBody;
use crate::inbound::http::schemas::{
    CampaignPayloadSchema, CampaignSchema, CampaignWithSessionsSchema, ErrorCodeSchema,
    ErrorSchema, SessionPayloadSchema, SessionSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nimue booking API",
        description = "Publish tabletop campaigns and schedule their sessions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::campaigns::list_campaigns,
        crate::inbound::http::campaigns::create_campaign,
        crate::inbound::http::campaigns::create_session,
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CampaignSchema,
        SessionSchema,
        CampaignWithSessionsSchema,
        CampaignPayloadSchema,
        SessionPayloadSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ApiHealthBody
    )),
    tags(
        (name = "campaigns", description = "Campaigns and their sessions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case::campaign("crate.domain.Campaign", "locationText")]
    #[case::session("crate.domain.Session", "pricePerPlayer")]
    #[case::listing("crate.domain.CampaignWithSessions", "sessions")]
    #[case::error("crate.domain.Error", "code")]
    fn registered_schemas_carry_wire_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/campaigns")]
    #[case("/api/campaigns/{campaignId}/sessions")]
    #[case("/api/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}

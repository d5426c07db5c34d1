//! Serde roundtrip and JsonSchema validation for entity and response types.

use chrono::Utc;
use schemars::schema_for;
use colab_core::entities::*;
use colab_core::enums::*;
use colab_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_project() -> Project {
    Project {
        id: 1,
        title: "Soil microbiome survey".into(),
        description: "Sequencing samples from three sites".into(),
        owner_id: 7,
        required_skills: vec!["Go".into(), "Testing".into()],
        visibility: Visibility::Private,
        status: ProjectStatus::InProgress,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_invitation(status: InvitationStatus) -> Invitation {
    Invitation {
        id: 3,
        project_id: 1,
        inviter_id: 7,
        email: "u@x.com".into(),
        role: CollaboratorRole::Programmer,
        status,
        response_date: (status != InvitationStatus::Pending).then(Utc::now),
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(project_roundtrip, Project, sample_project());

roundtrip_and_validate!(
    accepted_invitation_roundtrip,
    Invitation,
    sample_invitation(InvitationStatus::Accepted)
);

roundtrip_and_validate!(
    profile_view_roundtrip,
    ProfileView,
    ProfileView {
        user_id: 7,
        email: "owner@lab.org".into(),
        profile: UserProfile {
            full_name: "Ada Owner".into(),
            location: "Gainesville, FL".into(),
            ..UserProfile::default()
        },
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    invitation_response_roundtrip,
    InvitationResponse,
    InvitationResponse {
        message: "Invitation rejected successfully".into(),
        invitation: sample_invitation(InvitationStatus::Rejected),
    }
);

#[test]
fn pending_invitation_omits_nothing() {
    let json = serde_json::to_value(sample_invitation(InvitationStatus::Pending)).unwrap();
    assert_eq!(json["status"], "pending");
    assert!(json["response_date"].is_null());
}

#[test]
fn project_status_uses_hyphenated_wire_form() {
    let json = serde_json::to_value(sample_project()).unwrap();
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["visibility"], "private");
}

#[test]
fn profile_fields_are_flattened() {
    let view = ProfileView {
        user_id: 2,
        email: "u@x.com".into(),
        profile: UserProfile {
            bio: "Works on compilers".into(),
            ..UserProfile::default()
        },
        updated_at: Utc::now(),
    };
    let json = serde_json::to_value(view).unwrap();
    assert_eq!(json["bio"], "Works on compilers");
    assert!(json.get("profile").is_none());
}

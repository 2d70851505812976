use serde_json::json;

use campaign_graphql::{
    DateIso, EntitlementResource, JsonObject, ObjectId, ResultResource, ScalarError,
};

#[test]
fn object_id_accepts_24_hex_chars() {
    let id = ObjectId::new("5f3e7a1b2c4d5e6f70819202").expect("valid id");
    assert_eq!(id.as_str(), "5f3e7a1b2c4d5e6f70819202");
    assert_eq!(id.to_string(), "5f3e7a1b2c4d5e6f70819202");
}

#[test]
fn object_id_rejects_wrong_length_and_non_hex() {
    assert!(matches!(
        ObjectId::new("abc"),
        Err(ScalarError::InvalidObjectId(_))
    ));
    assert!(matches!(
        ObjectId::new("zzzz7a1b2c4d5e6f70819202"),
        Err(ScalarError::InvalidObjectId(_))
    ));
}

#[test]
fn object_id_serde_round_trip_validates() {
    let id: ObjectId =
        serde_json::from_value(json!("5f3e7a1b2c4d5e6f70819202")).expect("valid id");
    assert_eq!(
        serde_json::to_value(&id).expect("serialize"),
        json!("5f3e7a1b2c4d5e6f70819202")
    );
    assert!(serde_json::from_value::<ObjectId>(json!("nope")).is_err());
}

#[test]
fn date_iso_parses_rfc3339() {
    let date = DateIso::parse("2020-04-01T12:30:00Z").expect("valid date");
    assert_eq!(date.to_string(), "2020-04-01T12:30:00+00:00");
}

#[test]
fn date_iso_rejects_garbage() {
    assert!(matches!(
        DateIso::parse("April 1st"),
        Err(ScalarError::InvalidDate(_))
    ));
}

#[test]
fn json_object_accepts_objects_only() {
    let object = JsonObject::from_value(json!({"b": 2, "a": 1})).expect("object");
    assert_eq!(object.0.len(), 2);
    assert!(matches!(
        JsonObject::from_value(json!([1, 2])),
        Err(ScalarError::NotAnObject { actual: "array" })
    ));
    assert!(matches!(
        JsonObject::from_value(json!("text")),
        Err(ScalarError::NotAnObject { actual: "string" })
    ));
}

#[test]
fn entitlement_resource_dispatch() {
    assert_eq!(EntitlementResource::MediaChannel.type_name(), "MediaChannel");
    assert_eq!(
        EntitlementResource::MediaChannel.query_field(),
        "mediaChannel"
    );
    assert_eq!(
        EntitlementResource::Marketplace.connection_field(),
        "marketplaces"
    );

    let parsed: EntitlementResource =
        serde_json::from_value(json!("Organization")).expect("known variant");
    assert_eq!(parsed, EntitlementResource::Organization);
}

#[test]
fn result_resource_dispatch() {
    assert_eq!(ResultResource::MarketingAd.connection_field(), "marketingAds");
    assert_eq!(
        ResultResource::MarketingCampaign.type_name(),
        "MarketingCampaign"
    );
    assert_eq!(
        ResultResource::MarketingCampaign.query_field(),
        "marketingCampaign"
    );
}

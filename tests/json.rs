use nullable::{NullI64, NullInt, NullUint, Presence, NULL_BYTES};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Patch {
    #[serde(default, skip_serializing_if = "NullInt::is_zero")]
    age: NullInt,

    #[serde(default)]
    visits: NullUint,
}

#[test]
fn it_tells_absent_fields_from_null_fields() -> anyhow::Result<()> {
    let absent: Patch = serde_json::from_str("{}")?;
    assert_eq!(absent.age.presence(), Presence::Unset);
    assert_eq!(absent.visits.presence(), Presence::Unset);

    let null: Patch = serde_json::from_str(r#"{"age":null,"visits":null}"#)?;
    assert_eq!(null.age.presence(), Presence::Null);
    assert_eq!(null.age.value(), 0);
    assert_eq!(null.visits.presence(), Presence::Null);

    let valued: Patch = serde_json::from_str(r#"{"age":-4,"visits":12}"#)?;
    assert_eq!(valued.age.presence(), Presence::Value(-4));
    assert_eq!(valued.visits.presence(), Presence::Value(12));

    Ok(())
}

#[test]
fn it_rejects_mistyped_fields() {
    assert!(serde_json::from_str::<Patch>(r#"{"age":"4"}"#).is_err());
    assert!(serde_json::from_str::<Patch>(r#"{"age":4.5}"#).is_err());
    assert!(serde_json::from_str::<Patch>(r#"{"visits":-1}"#).is_err());
}

#[test]
fn it_skips_null_fields_when_asked() -> anyhow::Result<()> {
    let patch = Patch {
        age: NullInt::null(),
        visits: NullUint::null(),
    };
    assert_eq!(serde_json::to_value(&patch)?, json!({ "visits": null }));

    let patch = Patch {
        age: NullInt::from(30_isize),
        visits: NullUint::from(2_usize),
    };
    assert_eq!(serde_json::to_value(&patch)?, json!({ "age": 30, "visits": 2 }));

    Ok(())
}

#[test]
fn it_agrees_with_serde_json() -> anyhow::Result<()> {
    for n in [NullI64::from(i64::MIN), NullI64::from(0_i64), NullI64::null()] {
        assert_eq!(serde_json::to_vec(&n)?, n.marshal_json());

        let mut out = NullI64::default();
        out.unmarshal_json(&serde_json::to_vec(&n)?)?;
        assert_eq!(out, serde_json::from_slice::<NullI64>(&n.marshal_json())?);
    }

    Ok(())
}

#[test]
fn it_marshals_the_shared_null_token() {
    assert_eq!(NULL_BYTES, b"null");
    assert_eq!(NullUint::new(9, false).marshal_json(), NULL_BYTES);
}

#[test]
fn it_round_trips_unsigned_values() -> anyhow::Result<()> {
    for v in [0, 1, usize::from(u16::MAX), usize::MAX] {
        let n = NullUint::from(v);
        let mut out = NullUint::default();
        out.unmarshal_json(&n.marshal_json())?;

        assert_eq!(out, n);
    }

    Ok(())
}

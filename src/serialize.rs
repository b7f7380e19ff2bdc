use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Shape a stored document for transport: the native `_id` becomes a string
/// `id` field and every ObjectId in the payload is stringified, however
/// deeply nested.
pub fn serialize_doc(mut doc: Document) -> Value {
    let mut map = Map::new();
    if let Some(id) = doc.remove("_id") {
        map.insert("id".to_string(), bson_to_json(id));
    }
    for (key, value) in doc {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

/// Recursive Bson → JSON conversion rendering ObjectIds as plain hex strings
/// rather than extended-JSON `{"$oid": ...}` objects.
pub fn bson_to_json(bson: Bson) -> Value {
    match bson {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Bson::Null => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn id_field_replaces_native_key() {
        let oid = ObjectId::parse_str("65f0123456789abcdef01234").unwrap();
        let value = serialize_doc(doc! { "_id": oid, "title": "Tee", "price": 28.0 });

        assert_eq!(value["id"], json!("65f0123456789abcdef01234"));
        assert!(value.get("_id").is_none());
        assert_eq!(value["title"], json!("Tee"));
        assert_eq!(value["price"], json!(28.0));
    }

    #[test]
    fn nested_object_ids_are_stringified() {
        let oid = ObjectId::parse_str("65f0123456789abcdef01234").unwrap();
        let value = serialize_doc(doc! {
            "_id": oid,
            "items": [ { "product_id": oid, "quantity": 2 } ],
            "related": { "parent": oid }
        });

        assert_eq!(
            value["items"][0]["product_id"],
            json!("65f0123456789abcdef01234")
        );
        assert_eq!(value["items"][0]["quantity"], json!(2));
        assert_eq!(value["related"]["parent"], json!("65f0123456789abcdef01234"));
    }

    #[test]
    fn scalars_survive_unchanged() {
        let value = serialize_doc(doc! {
            "featured": true,
            "stock": 50_i32,
            "count": 9_000_000_000_i64,
            "description": Bson::Null
        });

        assert_eq!(value["featured"], json!(true));
        assert_eq!(value["stock"], json!(50));
        assert_eq!(value["count"], json!(9_000_000_000_i64));
        assert_eq!(value["description"], Value::Null);
    }

    #[test]
    fn document_without_native_key_gets_no_id() {
        let value = serialize_doc(doc! { "title": "Tee" });
        assert!(value.get("id").is_none());
    }
}

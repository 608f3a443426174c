use serde::Serialize;
use serde_json::{Map, Value};

/// A flat, external-safe view of a row: field name to primitive value
pub type Record = Map<String, Value>;

/// Flattens a model into a [`Record`].
///
/// Only the row's own columns appear, foreign keys included. Related rows are
/// never embedded, and fields marked `#[serde(skip_serializing)]` on the model
/// (the user's password) never appear.
pub(crate) fn to_record<M>(model: &M) -> Record
where
    M: Serialize,
{
    match serde_json::to_value(model) {
        Ok(Value::Object(record)) => record,
        // unreachable for the entity models: derived `Serialize` on a struct of
        // integers, strings and booleans always yields an object
        _ => Record::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comment, follower, like, notification, post, user};
    use maplit::btreeset;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn keys(record: &Record) -> BTreeSet<&str> {
        record.keys().map(String::as_str).collect()
    }

    #[test]
    fn serde_in_scope() {
        #[allow(unused_imports)]
        use serde::Serialize;

        // the entity method wins over `serde::Serialize::serialize`
        let record = like::Model {
            id: 1,
            post_id: 2,
            user_id: 3,
        }
        .serialize();
        assert_eq!(record["post_id"], 2);
    }

    #[test]
    fn user_omits_password() {
        let record = user::Model {
            id: 1,
            email: "a@x.com".to_owned(),
            password: "hunter2".to_owned(),
            nickname: "a".to_owned(),
        }
        .serialize();

        assert_eq!(keys(&record), btreeset! {"id", "email", "nickname"});
        assert!(!record.values().any(|v| v == "hunter2"));
    }

    #[test]
    fn post_like_comment() {
        let post = post::Model {
            id: 3,
            description: "sunset".to_owned(),
            post_url: "https://img.example/sunset.png".to_owned(),
            user_id: 1,
        };
        assert_eq!(
            Value::Object(post.serialize()),
            json!({
                "id": 3,
                "description": "sunset",
                "post_url": "https://img.example/sunset.png",
                "user_id": 1,
            })
        );

        let like = like::Model {
            id: 4,
            post_id: 3,
            user_id: 1,
        };
        assert_eq!(
            Value::Object(like.serialize()),
            json!({ "id": 4, "post_id": 3, "user_id": 1 })
        );

        let comment = comment::Model {
            id: 5,
            user_id: 1,
            post_id: 3,
            content: "nice".to_owned(),
        };
        assert_eq!(
            Value::Object(comment.serialize()),
            json!({ "id": 5, "user_id": 1, "post_id": 3, "content": "nice" })
        );
    }

    #[test]
    fn follower_with_missing_side() {
        let edge = follower::Model {
            id: 9,
            follower_id: Some(1),
            followed_id: None,
        };
        assert_eq!(
            Value::Object(edge.serialize()),
            json!({ "id": 9, "follower_id": 1, "followed_id": null })
        );
    }

    #[test]
    fn notification_uses_type_key() {
        let record = notification::Model {
            id: 2,
            emisor_id: 1,
            receptor_id: 2,
            kind: "like".to_owned(),
            post_id: None,
            message: Some("a liked your post".to_owned()),
            is_read: false,
        }
        .serialize();

        assert_eq!(
            keys(&record),
            btreeset! {"id", "emisor_id", "receptor_id", "type", "post_id", "message", "is_read"}
        );
        assert_eq!(record["type"], "like");
        assert_eq!(record["post_id"], Value::Null);
        assert_eq!(record["is_read"], false);
    }
}

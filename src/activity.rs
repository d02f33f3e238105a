use serde::{Deserialize, Serialize};

/// An activity returned by the `activity/` endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Activity {
    /// A description.
    pub activity: String,
    /// A category, such as `relaxation` or `social`.
    #[serde(rename = "type")]
    pub kind: String,
    /// A number of participants.
    pub participants: u64,
    /// A price factor from 0 to 1.
    pub price: f64,
    /// A related link, possibly empty.
    pub link: String,
    /// A unique key.
    pub key: String,
    /// An accessibility factor from 0 to 1.
    pub accessibility: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize() {
        assert_eq!(
            serde_json::from_value::<Activity>(json!({
                "activity": "Learn how to play a new sport",
                "type": "recreational",
                "participants": 1,
                "price": 0.1,
                "link": "",
                "key": "5808228",
                "accessibility": 0.2
            }))
            .unwrap(),
            Activity {
                activity: "Learn how to play a new sport".into(),
                kind: "recreational".into(),
                participants: 1,
                price: 0.1,
                link: "".into(),
                key: "5808228".into(),
                accessibility: 0.2,
            }
        );
    }

    #[test]
    fn serialize_kind_as_type() {
        let value = serde_json::to_value(Activity {
            activity: "Take your dog on a walk".into(),
            kind: "relaxation".into(),
            participants: 1,
            price: 0.0,
            link: "".into(),
            key: "9318514".into(),
            accessibility: 0.2,
        })
        .unwrap();

        assert_eq!(value["type"], "relaxation");
        assert!(value.get("kind").is_none());
    }
}

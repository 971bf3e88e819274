//! Response envelopes shared by every route.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Wire format of [`ApiResponse::create_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Envelope wrapping every response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "2022-06-26 15:04")]
    create_date: NaiveDateTime,
    body: T,
}

impl<T> ApiResponse<T> {
    /// Wrap `body`, stamping the envelope with the current local time.
    pub fn of(body: T) -> Self {
        Self {
            create_date: Local::now().naive_local(),
            body,
        }
    }

    #[cfg(test)]
    pub fn create_date(&self) -> NaiveDateTime {
        self.create_date
    }

    #[cfg(test)]
    pub fn body(&self) -> &T {
        &self.body
    }
}

fn serialize_date<S>(
    date: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let date = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
        .map_err(serde::de::Error::custom)
}

/// Body of operations without a natural return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    success: bool,
}

impl SuccessResponse {
    pub fn create() -> Self {
        Self { success: true }
    }

    #[cfg(test)]
    pub fn success(&self) -> bool {
        self.success
    }
}

/// Hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

/// Payload decorated with `_links`, keyed by relation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    content: T,
    #[serde(rename = "_links")]
    links: BTreeMap<String, Link>,
}

impl<T> EntityModel<T> {
    pub fn of(content: T) -> Self {
        Self {
            content,
            links: BTreeMap::new(),
        }
    }

    /// Add (or replace) the link for relation `rel`.
    pub fn link(
        mut self,
        rel: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        self.links.insert(rel.into(), Link { href: href.into() });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::of(SuccessResponse::create());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["body"], json!({ "success": true }));
        let date = value["createDate"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(date, DATE_FORMAT).is_ok());
        assert_eq!(date.len(), "yyyy-MM-dd HH:mm".len());
    }

    #[test]
    fn test_create_date_is_fixed() {
        let response = ApiResponse::of(vec![1, 2, 3]);
        let date = response.create_date();

        let json = serde_json::to_string(&response).unwrap();
        let decoded: ApiResponse<Vec<i32>> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.body(), &vec![1, 2, 3]);
        assert_eq!(
            decoded.create_date().format(DATE_FORMAT).to_string(),
            date.format(DATE_FORMAT).to_string()
        );
        assert_eq!(response.create_date(), date);
    }

    #[test]
    fn test_links_are_flattened() {
        let model = EntityModel::of(ApiResponse::of(SuccessResponse::create()))
            .link("self", "http://localhost/")
            .link("profile", "http://localhost/docs/index.html");
        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(value["body"]["success"], true);
        assert!(value["createDate"].is_string());
        assert_eq!(value["_links"]["self"]["href"], "http://localhost/");
        assert_eq!(
            value["_links"]["profile"]["href"],
            "http://localhost/docs/index.html"
        );
    }
}

// src/record.rs
//! One rated movie as it was listed on the profile.
//!
//! Records are built once by the collector and never mutated afterwards:
//! fields are private, construction goes through `Record::new` plus the
//! `with_*` builders, and everything else only reads.

use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "cid")]
    id: String,
    full_title: String,
    #[serde(alias = "movie_link")]
    link: String,
    #[serde(alias = "intro")]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_rating")]
    rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poster_url: Option<String>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        full_title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_title: full_title.into(),
            link: link.into(),
            description: description.into(),
            rating: None,
            date: None,
            comment: None,
            poster_url: None,
        }
    }

    pub fn with_rating(mut self, rating: Option<u8>) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_poster_url(mut self, poster_url: Option<String>) -> Self {
        self.poster_url = poster_url;
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn full_title(&self) -> &str { &self.full_title }
    pub fn link(&self) -> &str { &self.link }
    pub fn description(&self) -> &str { &self.description }
    pub fn rating(&self) -> Option<u8> { self.rating }
    pub fn date(&self) -> Option<&str> { self.date.as_deref() }
    pub fn comment(&self) -> Option<&str> { self.comment.as_deref() }
    pub fn poster_url(&self) -> Option<&str> { self.poster_url.as_deref() }
}

/// Older exports stored the rating as a string ("4"); accept both shapes.
/// A number that does not fit a star count (negative, huge) loads as no
/// rating; text that is not a number at all is rejected.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    let n = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Raw::Number(n)) => n,
        Some(Raw::Text(t)) => t.trim().parse::<i64>().map_err(de::Error::custom)?,
    };
    Ok(u8::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("42", "花样年华 / In the Mood for Love", "https://movie.douban.com/subject/1291557/", "2000-09-29(香港) / 梁朝伟")
    }

    #[test]
    fn absent_optionals_are_omitted_not_null() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("rating"));
        assert!(!json.contains("null"));
        assert!(json.contains(r#""id":"42""#));
    }

    #[test]
    fn empty_comment_is_kept_distinct_from_absent() {
        let rec = sample().with_comment(Some(s!()));
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""comment":"""#));
    }

    #[test]
    fn legacy_field_names_and_string_rating_load() {
        let json = r#"{
            "cid": "7",
            "full_title": "Heat",
            "movie_link": "https://movie.douban.com/subject/1294371/",
            "intro": "1995-12-15(USA)",
            "rating": "4",
            "date": "2021-05-01"
        }"#;
        let rec: Record = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id(), "7");
        assert_eq!(rec.link(), "https://movie.douban.com/subject/1294371/");
        assert_eq!(rec.description(), "1995-12-15(USA)");
        assert_eq!(rec.rating(), Some(4));
        assert_eq!(rec.date(), Some("2021-05-01"));
        assert_eq!(rec.comment(), None);
    }

    #[test]
    fn rating_outside_u8_loads_as_absent() {
        for raw in ["-1", "\"-3\"", "300"] {
            let json = format!(r#"{{"id":"1","full_title":"x","link":"y","description":"z","rating":{raw}}}"#);
            let rec: Record = serde_json::from_str(&json).unwrap();
            assert_eq!(rec.rating(), None, "rating {raw}");
        }
        let json = r#"{"id":"1","full_title":"x","link":"y","description":"z","rating":7}"#;
        assert_eq!(serde_json::from_str::<Record>(json).unwrap().rating(), Some(7));
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let json = r#"{"id":"1","full_title":"x","link":"y","description":"z","rating":"five"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{"id":"1","full_title":"x","link":"y"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}

//! Data types for movies API responses
//!
//! The provider's response is passed through untouched. Accessors here are
//! lenient: a missing or oddly-typed field reads as "nothing there".

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the list of movie records in a provider response
const MOVIE_RESULTS: &str = "movie_results";

/// Raw provider response for one release year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoviePayload(Value);

impl MoviePayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The JSON document exactly as received
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Movie records in provider order; empty when the list is missing
    pub fn movies(&self) -> Vec<MovieRecord<'_>> {
        self.0
            .get(MOVIE_RESULTS)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(MovieRecord).collect())
            .unwrap_or_default()
    }

    /// Number of entries in the movie list, 0 if the field is missing
    pub fn movie_count(&self) -> usize {
        self.0
            .get(MOVIE_RESULTS)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Titles of all movie records that carry one
    pub fn titles(&self) -> Vec<&str> {
        self.movies().into_iter().filter_map(|m| m.title()).collect()
    }
}

impl From<Value> for MoviePayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed view of one entry in `movie_results`
#[derive(Debug, Clone, Copy)]
pub struct MovieRecord<'a>(&'a Value);

impl<'a> MovieRecord<'a> {
    pub fn title(&self) -> Option<&'a str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Release year; the provider sends it as either a string or a number
    pub fn year(&self) -> Option<String> {
        match self.0.get("year")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn imdb_id(&self) -> Option<&'a str> {
        self.0.get("imdb_id").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_movie_count_with_results() {
        let payload = MoviePayload::new(json!({
            "movie_results": [{"title": "A"}, {"title": "B"}, {}],
            "results": 3,
            "status": "OK"
        }));
        assert_eq!(payload.movie_count(), 3);
        assert_eq!(payload.titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_list_reads_as_empty() {
        let payload = MoviePayload::new(json!({"message": "You are not subscribed"}));
        assert_eq!(payload.movie_count(), 0);
        assert!(payload.movies().is_empty());
    }

    #[test]
    fn test_non_object_payload_reads_as_empty() {
        let payload = MoviePayload::new(json!([1, 2, 3]));
        assert_eq!(payload.movie_count(), 0);
        assert!(payload.titles().is_empty());
    }

    #[test]
    fn test_record_accessors() {
        let payload = MoviePayload::new(json!({
            "movie_results": [
                {"title": "Inception", "year": "2010", "imdb_id": "tt1375666"},
                {"title": 42, "year": 2011}
            ]
        }));
        let movies = payload.movies();
        assert_eq!(movies[0].title(), Some("Inception"));
        assert_eq!(movies[0].year().as_deref(), Some("2010"));
        assert_eq!(movies[0].imdb_id(), Some("tt1375666"));
        assert_eq!(movies[1].title(), None);
        assert_eq!(movies[1].year().as_deref(), Some("2011"));
    }

    #[test]
    fn test_serializes_transparently() {
        let value = json!({"movie_results": [{"title": "X"}], "extra": true});
        let payload = MoviePayload::new(value.clone());
        assert_eq!(serde_json::to_value(&payload).unwrap(), value);
    }
}

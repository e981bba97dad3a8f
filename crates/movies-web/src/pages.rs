//! HTML pages
//!
//! Every string that came from the provider or the user goes through
//! [`escape`] before it is written into markup.

use axum::http::StatusCode;
use movies_catalog::{MoviePayload, YearMatches, YearRange};
use std::fmt::Write;
use std::time::Duration;

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
    table { border-collapse: collapse; margin-bottom: 1rem; }
    td, th { text-align: left; padding: 0.25rem 1rem 0.25rem 0; border-bottom: 1px solid #ddd; }
    form { margin: 0.75rem 0; }
    .muted { color: #666; }
    img { max-width: 100%; }
"#;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Home page with the load, lookup and search forms
pub fn index_page(years: YearRange) -> String {
    let mut options = String::new();
    for year in years.years().rev() {
        let _ = writeln!(options, r#"      <option value="{year}">{year}</option>"#);
    }

    let body = format!(
        r#"  <h1>Movies by Year</h1>

  <form action="/load_movies" method="post">
    <button type="submit">Load all movies ({start}&ndash;{end})</button>
  </form>

  <form action="/movies" method="post">
    <label for="year">Year</label>
    <select id="year" name="year">
{options}    </select>
    <button type="submit">Show movies</button>
  </form>

  <form action="/search_movies" method="post">
    <label for="search_query">Title</label>
    <input id="search_query" name="search_query" type="text" placeholder="Search loaded movies">
    <button type="submit">Search</button>
  </form>

  <h2>Movies per year</h2>
  <img src="/plot_movies" alt="Number of movies per year">"#,
        start = years.start,
        end = years.end,
    );

    layout("Movies by Year", &body)
}

/// Listing for one year, with how long the lookup took
pub fn movies_page(year: u16, payload: &MoviePayload, elapsed: Duration) -> String {
    let movies = payload.movies();
    let mut body = format!("  <h1>Movies released in {year}</h1>\n");

    if movies.is_empty() {
        body.push_str("  <p>No movies found for this year.</p>\n");
    } else {
        body.push_str("  <table>\n    <tr><th>Title</th><th>Year</th><th>IMDb</th></tr>\n");
        for movie in &movies {
            let title = movie.title().map(escape).unwrap_or_default();
            let release = movie.year().as_deref().map(escape).unwrap_or_default();
            let imdb = match movie.imdb_id() {
                Some(id) => format!(
                    r#"<a href="https://www.imdb.com/title/{id}/">{id}</a>"#,
                    id = escape(id)
                ),
                None => String::new(),
            };
            let _ = writeln!(
                body,
                "    <tr><td>{title}</td><td>{release}</td><td>{imdb}</td></tr>"
            );
        }
        body.push_str("  </table>\n");
    }

    let _ = writeln!(
        body,
        r#"  <p class="muted">Lookup took {:.2} ms</p>"#,
        elapsed.as_secs_f64() * 1000.0
    );
    body.push_str(r#"  <p><a href="/">Back</a></p>"#);

    layout(&format!("Movies of {year}"), &body)
}

/// Search results grouped by year
pub fn search_page(query: &str, results: &[YearMatches]) -> String {
    let query = escape(query);
    let mut body = format!("  <h1>Results for &ldquo;{query}&rdquo;</h1>\n");

    if results.is_empty() {
        body.push_str(
            r#"  <p>No loaded movies match. Try loading all movies first.</p>
"#,
        );
    }
    for group in results {
        let _ = writeln!(body, "  <h2>{}</h2>\n  <ul>", group.year);
        for title in &group.titles {
            let _ = writeln!(body, "    <li>{}</li>", escape(title));
        }
        body.push_str("  </ul>\n");
    }
    body.push_str(r#"  <p><a href="/">Back</a></p>"#);

    layout("Search results", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"  <h1>{status}</h1>
  <p>{message}</p>
  <p><a href="/">Back</a></p>"#,
        message = escape(message),
    );
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_lists_supported_years() {
        let html = index_page(YearRange::new(2010, 2024));
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(r#"<option value="2010">2010</option>"#));
        assert!(html.contains(r#"<option value="2024">2024</option>"#));
        assert!(html.contains(r#"action="/search_movies""#));
    }

    #[test]
    fn test_movies_page_escapes_titles() {
        let payload = MoviePayload::new(json!({
            "movie_results": [
                {"title": "<script>alert(1)</script>", "year": "2015", "imdb_id": "tt0000001"}
            ]
        }));
        let html = movies_page(2015, &payload, Duration::from_millis(12));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("tt0000001"));
        assert!(html.contains("Lookup took 12.00 ms"));
    }

    #[test]
    fn test_movies_page_without_results() {
        let payload = MoviePayload::new(json!({"status": "OK"}));
        let html = movies_page(2011, &payload, Duration::ZERO);
        assert!(html.contains("No movies found for this year."));
    }

    #[test]
    fn test_search_page_groups_by_year() {
        let results = vec![YearMatches {
            year: 2015,
            titles: vec!["Inception 2".to_string()],
        }];
        let html = search_page("inception", &results);
        assert!(html.contains("<h2>2015</h2>"));
        assert!(html.contains("<li>Inception 2</li>"));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(StatusCode::BAD_GATEWAY, "Upstream down");
        assert!(html.contains("502 Bad Gateway"));
        assert!(html.contains("Upstream down"));
    }
}

//! Image hint extraction from webpage markup.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::entities::{CandidateOrigin, ImageCandidate};

const PLACEHOLDER_MARKER: &str = "placeholder";

/// Finds the best image hint in a page.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Returns the highest-priority image hint, if any.
    ///
    /// Categories are tried in order: structured data, Open Graph, then
    /// Twitter card. The first category with a usable hint wins even if a
    /// later one also matches.
    #[must_use]
    pub fn extract(html: &str) -> Option<ImageCandidate> {
        let document = Html::parse_document(html);

        if let Some(url) = structured_data_image(&document, html) {
            debug!(url = %url, "Found structured data image");
            return Some(ImageCandidate::new(url, CandidateOrigin::StructuredData));
        }

        if let Some(url) = first_meta_content(&document, og_image_selector()) {
            debug!(url = %url, "Found og:image");
            return Some(ImageCandidate::new(url, CandidateOrigin::OpenGraph));
        }

        if let Some(url) = first_meta_content(&document, twitter_image_selector()) {
            debug!(url = %url, "Found twitter:image");
            return Some(ImageCandidate::new(url, CandidateOrigin::SocialCard));
        }

        None
    }
}

fn ld_json_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"script[type="application/ld+json"]"#).expect("Invalid selector")
    })
}

fn og_image_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"meta[property="og:image"][content]"#).expect("Invalid selector")
    })
}

fn twitter_image_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(
            r#"meta[name="twitter:image"][content], meta[property="twitter:image"][content]"#,
        )
        .expect("Invalid selector")
    })
}

fn embedded_image_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#""image"\s*:\s*"([^"]+)""#).expect("Invalid regex"))
}

fn embedded_image_object_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#""@type"\s*:\s*"ImageObject"[^{}]*?"url"\s*:\s*"([^"]+)""#)
            .expect("Invalid regex")
    })
}

fn embedded_image_object_url_first_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#""url"\s*:\s*"([^"]+)"[^{}]*?"@type"\s*:\s*"ImageObject""#)
            .expect("Invalid regex")
    })
}

fn structured_data_image(document: &Html, raw: &str) -> Option<String> {
    let mut found = Vec::new();

    for script in document.select(ld_json_selector()) {
        let text: String = script.text().collect();
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(value) => collect_json_images(&value, &mut found),
            Err(e) => debug!(error = %e, "Skipping unparsable ld+json block"),
        }
    }

    // Inline JSON outside ld+json blocks, e.g. hydration state.
    found.extend(inline_json_images(raw));

    found
        .into_iter()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty() && !url.contains(PLACEHOLDER_MARKER))
}

fn inline_json_images(raw: &str) -> Vec<String> {
    let mut matches: Vec<(usize, String)> = [
        embedded_image_regex(),
        embedded_image_object_regex(),
        embedded_image_object_url_first_regex(),
    ]
    .into_iter()
    .flat_map(|regex| regex.captures_iter(raw).filter_map(|cap| cap.get(1)))
    .map(|m| (m.start(), m.as_str().replace("\\/", "/")))
    .collect();

    matches.sort_by_key(|(position, _)| *position);
    matches.into_iter().map(|(_, url)| url).collect()
}

/// Walks keys in document order.
fn collect_json_images(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if is_image_object(map)
                && let Some(Value::String(url)) = map.get("url")
            {
                out.push(url.clone());
            }
            for (key, child) in map {
                if key == "image" {
                    collect_image_value(child, out);
                } else {
                    collect_json_images(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_json_images(item, out);
            }
        }
        _ => {}
    }
}

fn collect_image_value(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(url) => out.push(url.clone()),
        Value::Array(items) => {
            for item in items {
                collect_image_value(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(Value::String(url)) = map.get("url").or_else(|| map.get("contentUrl")) {
                out.push(url.clone());
            } else {
                collect_json_images(value, out);
            }
        }
        _ => {}
    }
}

fn is_image_object(map: &Map<String, Value>) -> bool {
    match map.get("@type") {
        Some(Value::String(kind)) => kind == "ImageObject",
        Some(Value::Array(kinds)) => kinds.iter().any(|k| k.as_str() == Some("ImageObject")),
        _ => false,
    }
}

fn first_meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|meta| meta.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(ToString::to_string)
}

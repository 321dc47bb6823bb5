//! JSON-LD structured data embedded from the site shell.

use crate::config;
use serde::Serialize;

#[derive(Serialize)]
struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
    email: String,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    description: &'static str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
}

pub fn person_json_ld() -> String {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: "Dean Miller",
        url: config::SITE_URL,
        email: format!("mailto:{}", config::CONTACT_EMAIL),
        job_title: "Audiobook Narrator",
        description: "Professional audiobook narrator specializing in character-driven \
                      stories with strong emotional arcs.",
        same_as: vec![
            config::TIKTOK_URL,
            config::INSTAGRAM_URL,
            config::DISCORD_URL,
        ],
    };
    serde_json::to_string(&person).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_json_ld_is_valid_schema_org_json() {
        let raw = person_json_ld();
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Dean Miller");
        assert!(value["sameAs"].as_array().is_some_and(|a| a.len() == 3));
    }
}

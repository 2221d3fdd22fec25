use std::{borrow::Cow, str::FromStr};

use itertools::Itertools;

use crate::model::{QueryParams, TemplateSlot, UrlTemplate};

impl FromStr for UrlTemplate {
    type Err = anyhow::Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let slot_regex = regex::Regex::new(r"\{\{\s*(.*?)\s*\}\}")?;
        let mut removed = 0;

        let slots = slot_regex
            .captures_iter(val)
            .map(|captures| {
                let name = captures
                    .get(1)
                    .ok_or_else(|| anyhow::anyhow!("Could not find captured slot name"))?
                    .as_str();
                let whole = captures
                    .get(0)
                    .ok_or_else(|| anyhow::anyhow!("Could not find whole slot match"))?;
                let start = whole.start() - removed;
                let end = whole.end() - removed;
                removed += whole.len();
                Ok::<_, anyhow::Error>((
                    TemplateSlot {
                        name: name.to_string(),
                        start,
                    },
                    end,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut value = val.to_owned();
        for (slot, span_end) in &slots {
            value.replace_range(slot.start..*span_end, "");
        }
        let slots = slots.into_iter().map(|(slot, _)| slot).collect_vec();

        Ok(Self { value, slots })
    }
}

impl UrlTemplate {
    /// Renders the template against `params`. Every substituted value is
    /// percent-encoded, so the result is safe to hand to the browser as-is.
    pub fn render(&self, params: &QueryParams) -> anyhow::Result<Cow<str>> {
        if self.slots.is_empty() {
            return Ok(Cow::Borrowed(&self.value));
        }

        let mut rendered = self.value.clone();
        let mut inserted = 0;
        for slot in &self.slots {
            let value = params.get(&slot.name).ok_or_else(|| {
                anyhow::anyhow!("Could not find a value for URL slot {}", slot.name)
            })?;
            let encoded = urlencoding::encode(value);
            rendered.insert_str(slot.start + inserted, &encoded);
            inserted += encoded.len();
        }
        Ok(Cow::Owned(rendered))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_plain_url_has_no_slots() {
        let template = UrlTemplate::from_str("https://example.com/").unwrap();
        assert_eq!(
            UrlTemplate {
                value: "https://example.com/".to_string(),
                slots: vec![],
            },
            template
        );
    }

    #[test]
    fn test_single_slot() {
        let template = UrlTemplate::from_str("https://www.google.com/search?q={{query}}").unwrap();
        assert_eq!(
            UrlTemplate {
                value: "https://www.google.com/search?q=".to_string(),
                slots: vec![TemplateSlot {
                    name: "query".to_string(),
                    start: 32,
                }],
            },
            template
        );
    }

    #[test]
    fn test_slot_names_are_trimmed() {
        let template = UrlTemplate::from_str("https://example.com/?q={{ query }}").unwrap();
        assert_eq!("query", template.slots[0].name);
    }

    #[test]
    fn test_multiple_slots() {
        let template = UrlTemplate::from_str("{{lang}}.example.com/?q={{query}}").unwrap();
        assert_eq!(
            UrlTemplate {
                value: ".example.com/?q=".to_string(),
                slots: vec![
                    TemplateSlot {
                        name: "lang".to_string(),
                        start: 0,
                    },
                    TemplateSlot {
                        name: "query".to_string(),
                        start: 16,
                    },
                ],
            },
            template
        );
    }

    #[test]
    fn test_render_without_slots_borrows() {
        let template = UrlTemplate::from_str("https://example.com/").unwrap();
        let params = QueryParams::default();
        assert_eq!("https://example.com/", template.render(&params).unwrap());
    }

    #[test]
    fn test_render_percent_encodes_values() {
        let template = UrlTemplate::from_str("https://www.google.com/search?q={{query}}").unwrap();
        let mut params = QueryParams::default();
        params.set("query", "c++ tutorials");
        assert_eq!(
            "https://www.google.com/search?q=c%2B%2B%20tutorials",
            template.render(&params).unwrap()
        );
    }

    #[test]
    fn test_encoded_query_round_trips() {
        let template = UrlTemplate::from_str("https://www.google.com/search?q={{query}}").unwrap();
        let mut params = QueryParams::default();
        params.set("query", "c++ tutorials");
        let url = template.render(&params).unwrap();
        let (_, encoded) = url.split_once("?q=").unwrap();
        assert_eq!("c++ tutorials", urlencoding::decode(encoded).unwrap());
    }

    #[test]
    fn test_render_multiple_slots() {
        let template = UrlTemplate::from_str("{{lang}}.example.com/?q={{query}}").unwrap();
        let mut params = QueryParams::default();
        params.set("lang", "en");
        params.set("query", "rust book");
        assert_eq!(
            "en.example.com/?q=rust%20book",
            template.render(&params).unwrap()
        );
    }

    #[test]
    fn test_render_missing_value_is_an_error() {
        let template = UrlTemplate::from_str("https://example.com/?q={{query}}").unwrap();
        assert!(template.render(&QueryParams::default()).is_err());
    }
}

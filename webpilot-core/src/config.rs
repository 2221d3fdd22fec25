use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Root {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default)]
    pub lexicon: Vec<Entry>,
}

fn default_search_url() -> String {
    "https://www.google.com/search?q={{query}}".to_string()
}

/// A word the tagger should know about. Bare strings are shorthand for
/// verbs, the common case when teaching new command words.
#[derive(Debug)]
pub struct Entry {
    pub word: String,
    pub class: String,
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> serde::de::Visitor<'de> for EntryVisitor {
            type Value = Entry;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A word or a `word: class` pair")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Entry {
                    word: v.to_owned(),
                    class: "verb".to_owned(),
                })
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let (word, class) = map
                    .next_entry::<String, String>()?
                    .ok_or(serde::de::Error::custom("Unexpected empty lexicon entry"))?;

                if let Ok(Some(_)) = map.next_key::<String>() {
                    return Err(serde::de::Error::custom("Unexpected extra key"));
                }

                Ok(Entry { word, class })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

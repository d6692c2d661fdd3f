//! Built-in phrase pools and the fallback meanings dictionary
//!
//! Everything here can be replaced at runtime by pointing `--seed-file`
//! at a JSON file with the same field names. Missing fields keep their
//! built-in values, and an explicitly empty pool falls back too so the
//! renderer always has something to pick from.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_OPENINGS: &[&str] = &[
    "The name {name} means {meaning}.",
    "{name} is a name that means {meaning}.",
    "Meaning of {name}: {meaning}.",
    "{name} — meaning: {meaning}.",
];

const DEFAULT_ORIGINS: &[&str] = &[
    "Origin: {origin}.",
    "This name comes from {origin}.",
    "Rooted in {origin} culture.",
    "A name with {origin} origins.",
];

const DEFAULT_PERSONALITY: &[&str] = &[
    "{name} is often associated with qualities like {traits}.",
    "People with the name {name} are believed to be {traits}.",
    "Those named {name} tend to be {traits}.",
    "{name} often suggests a personality that is {traits}.",
];

const DEFAULT_TRAITS: &[&str] = &[
    "kind and compassionate",
    "confident and ambitious",
    "creative and thoughtful",
    "calm and wise",
    "energetic and curious",
    "practical and hardworking",
    "adventurous and bold",
    "loyal and reliable",
];

const BUILTIN_MEANINGS: &[(&str, &str)] = &[
    ("arjun", "Arjun means bright, shining, or white. Symbolizes courage, heroism, and intelligence."),
    ("aarav", "Aarav means peace, calmness, and wisdom. Associated with a peaceful and intelligent personality."),
    ("vivaan", "Vivaan means full of life, energy, and vibrance. Represents enthusiasm and freshness."),
    ("krish", "Krish is short for Krishna, meaning one who attracts. Represents charm, love, and positivity."),
    ("shivansh", "Shivansh means a part of Lord Shiva. Symbolizes strength, spirituality, and deep inner power."),
    ("keshav", "Keshav is a name of Krishna, meaning one with beautiful hair. Represents love and kindness."),
    ("rudra", "Rudra is a form of Shiva, symbolizing power, storm, and transformation."),
    ("arnav", "Arnav means ocean or sea, symbolizing depth, vastness, and emotional strength."),
    ("yash", "Yash means fame, success, and glory. Represents achievement and recognition."),
    ("lakshay", "Lakshay means target or aim. Symbolizes ambition, focus, and direction."),
    ("priya", "Priya means beloved, dear one. Symbolizes affection, warmth, and kindness."),
    ("diya", "Diya means lamp or light. Represents brightness, hope, and positivity."),
    ("advika", "Advika means unique or one of a kind. Symbolizes individuality and uniqueness."),
    ("ishika", "Ishika means paintbrush or sacred arrow. Represents creativity and purpose."),
    ("anvi", "Anvi is a name of Goddess Lakshmi, meaning kind and compassionate."),
    ("radha", "Radha symbolizes devotion, love, and purity as the consort of Lord Krishna."),
    ("charvi", "Charvi means beautiful and charming. Represents grace and inner beauty."),
    ("tanvi", "Tanvi means delicate and beautiful girl. Represents elegance and softness."),
    ("nidhi", "Nidhi means treasure or wealth. Represents abundance and prosperity."),
    ("manya", "Manya means worthy of honor and respect."),
    ("ali", "Ali means high, elevated, or champion. Symbolizes strength and honor."),
    ("yusuf", "Yusuf means God increases. Represents blessings, growth, and prosperity."),
    ("ahmed", "Ahmed means highly praised or one who constantly thanks God."),
    ("imran", "Imran means prosperity or exaltation. A respected and traditional name."),
    ("omar", "Omar means flourishing, long-lived, or eloquent speaker."),
    ("kabir", "Kabir means great or noble. Symbolizes wisdom and spiritual strength."),
    ("ayaan", "Ayaan means blessing or gift of God."),
    ("rehan", "Rehan means sweet basil, fragrance, or kingly. Represents freshness and grace."),
    ("faisal", "Faisal means decisive, strong judge, or one who settles arguments."),
    ("muhammad", "Muhammad means the praised one. The name of the Prophet, symbolizing high respect."),
    ("zara", "Zara means princess, flower, or shining star. Represents elegance and brightness."),
    ("ayesha", "Ayesha means lively, prosperous, or life. A respected Islamic name."),
    ("noor", "Noor means light or radiance. Represents guidance and illumination."),
    ("sara", "Sara means princess or noblewoman. Represents purity and grace."),
    ("maryam", "Maryam means beloved, pure, or elevated. The mother of Isa (Jesus)."),
    ("sana", "Sana means brilliance, radiance, or praise."),
    ("meera", "Meera symbolizes devotion to Lord Krishna. Represents love and spirituality."),
    ("ira", "Ira means earth or speech. Associated with Goddess Saraswati in some traditions."),
    ("kavya", "Kavya means poetry. Represents artistic talent and creativity."),
    ("saanvi", "Saanvi is a name of Goddess Lakshmi, symbolizing beauty and prosperity."),
    ("myra", "Myra means beloved, admirable, or sweet."),
    ("anika", "Anika means graceful and brilliant. Linked to Goddess Durga."),
    ("riya", "Riya means singer or graceful. Represents charm and expression."),
    ("tara", "Tara means star. Represents guidance, light, and hope."),
    ("samaira", "Samaira means enchanting or protected."),
    ("arohi", "Arohi means ascending or musical tune."),
    ("isha", "Isha is another name of Goddess Parvati, meaning protector or supreme."),
    ("aditi", "Aditi means boundless and motherly. Associated with freedom."),
    ("shruti", "Shruti means musical note or sound. Represents knowledge."),
    ("divya", "Divya means divine or heavenly."),
    ("tejas", "Tejas means brilliance, sharpness, or glow."),
    ("aryan", "Aryan means noble or honorable."),
    ("ansh", "Ansh means portion or part of."),
    ("dev", "Dev means god or divine."),
    ("vihaan", "Vihaan means dawn or beginning of a new era."),
    ("ishaan", "Ishaan means sun or Lord Shiva."),
    ("shaurya", "Shaurya means bravery or heroism."),
    ("dhruv", "Dhruv means pole star, symbolizing stability."),
    ("atharv", "Atharv means wise or learned."),
    ("raghav", "Raghav means descendant of King Raghu."),
    ("rohan", "Rohan means ascending or sandalwood."),
    ("manav", "Manav means human or humane."),
    ("naman", "Naman means salutation or respect."),
    ("varun", "Varun means lord of water."),
    ("kartik", "Kartik is associated with Lord Murugan."),
    ("gautam", "Gautam means bright or enlightened (Gautam Buddha)."),
    ("siddharth", "Siddharth means one who has attained enlightenment."),
    ("nikhil", "Nikhil means complete or whole."),
    ("kunal", "Kunal means lotus."),
    ("simran", "Simran means remembrance (of God)."),
    ("neha", "Neha means love, rain, or affection."),
    ("ritika", "Ritika means movement or stream."),
    ("parth", "Parth means warrior prince (Arjuna)."),
    ("reyansh", "Reyansh means ray of light or part of Lord Vishnu."),
    ("ishita", "Ishita means mastery, excellence."),
    ("jhanvi", "Jhanvi means Ganga river."),
    ("kritika", "Kritika means star or creativity."),
    ("tanisha", "Tanisha means ambitious or desire."),
    ("harsh", "Harsh means happiness or joy."),
    ("aditya", "Aditya means sun or son of Aditi."),
    ("samar", "Samar means battle or companion in war."),
    ("ranveer", "Ranveer means brave warrior."),
    ("rahul", "Rahul means conqueror of miseries."),
    ("harshit", "Harshit means joyous or happy."),
    ("devansh", "Devansh means part of God."),
    ("hridaan", "Hridaan means great heart or kind-hearted."),
];

/// Phrase pools and the name-to-meaning dictionary used when a record
/// carries no meaning of its own
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub opening_templates: Vec<String>,
    pub origin_templates: Vec<String>,
    pub personality_templates: Vec<String>,
    pub default_traits: Vec<String>,
    pub meanings: HashMap<String, String>,
}

impl Default for SeedData {
    fn default() -> Self {
        SeedData {
            opening_templates: to_strings(DEFAULT_OPENINGS),
            origin_templates: to_strings(DEFAULT_ORIGINS),
            personality_templates: to_strings(DEFAULT_PERSONALITY),
            default_traits: to_strings(DEFAULT_TRAITS),
            meanings: BUILTIN_MEANINGS
                .iter()
                .map(|(name, meaning)| (name.to_string(), meaning.to_string()))
                .collect(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SeedData {
    /// Load seed data from a JSON file. Fields absent from the file keep
    /// their built-in values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let mut seed: SeedData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        seed.restore_empty_pools();
        seed.meanings = seed
            .meanings
            .into_iter()
            .map(|(name, meaning)| (name.trim().to_lowercase(), meaning))
            .collect();
        Ok(seed)
    }

    /// Dictionary lookup by case-insensitive name
    pub fn meaning_for(&self, name: &str) -> Option<&str> {
        self.meanings
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    fn restore_empty_pools(&mut self) {
        let builtin = SeedData::default();
        if self.opening_templates.is_empty() {
            self.opening_templates = builtin.opening_templates;
        }
        if self.origin_templates.is_empty() {
            self.origin_templates = builtin.origin_templates;
        }
        if self.personality_templates.is_empty() {
            self.personality_templates = builtin.personality_templates;
        }
        if self.default_traits.is_empty() {
            self.default_traits = builtin.default_traits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_pools_are_populated() {
        let seed = SeedData::default();
        assert_eq!(seed.opening_templates.len(), 4);
        assert_eq!(seed.origin_templates.len(), 4);
        assert_eq!(seed.personality_templates.len(), 4);
        assert_eq!(seed.default_traits.len(), 8);
        assert!(seed.meanings.len() > 80);
    }

    #[test]
    fn test_meaning_lookup_is_case_insensitive() {
        let seed = SeedData::default();
        let meaning = seed.meaning_for(" Arjun ").expect("builtin entry");
        assert!(meaning.starts_with("Arjun means bright"));
        assert!(seed.meaning_for("no-such-name").is_none());
    }

    #[test]
    fn test_load_keeps_builtins_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"opening_templates": ["{{name}}: {{meaning}}"], "meanings": {{"Kai": "Kai means sea."}}}}"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.opening_templates, vec!["{name}: {meaning}"]);
        assert_eq!(seed.origin_templates.len(), 4);
        assert_eq!(seed.default_traits.len(), 8);
        assert_eq!(seed.meaning_for("kai"), Some("Kai means sea."));
        // replacing the dictionary drops the built-in entries
        assert!(seed.meaning_for("arjun").is_none());
    }

    #[test]
    fn test_load_restores_explicitly_empty_pools() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_traits": []}}"#).unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.default_traits.len(), 8);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(SeedData::load(file.path()).is_err());
    }
}

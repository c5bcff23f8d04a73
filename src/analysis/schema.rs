use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const PERSONALITY_BASE_URL: &str = "https://www.16personalities.com/";

const MBTI_LIST_LEN: usize = 3;
const PALETTE_LEN: usize = 4;

/// Post-parse checks that serde's type mapping cannot express.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamousPerson {
    pub name: String,
    pub description: String,
}

/// MBTI profile exactly as the model is asked to produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiProfile {
    #[serde(default)]
    pub mbti_type: String,
    pub type_name: String,
    pub core_characteristics: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub career_paths: Vec<String>,
    pub famous_people: Vec<FamousPerson>,
    pub summary: String,
}

impl Validate for MbtiProfile {
    fn validate(&self) -> Result<()> {
        let code = self.mbti_type.trim();
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::schema(format!(
                "mbti_type '{}' is not a type code",
                self.mbti_type
            )));
        }

        exact_len("strengths", &self.strengths, MBTI_LIST_LEN)?;
        exact_len("challenges", &self.challenges, MBTI_LIST_LEN)?;
        exact_len("career_paths", &self.career_paths, MBTI_LIST_LEN)?;
        exact_len("famous_people", &self.famous_people, MBTI_LIST_LEN)?;

        for (field, items) in [
            ("strengths", &self.strengths),
            ("challenges", &self.challenges),
            ("career_paths", &self.career_paths),
        ] {
            if items.iter().any(|item| item.trim().is_empty()) {
                return Err(Error::schema(format!("{} contains an empty entry", field)));
            }
        }

        if self.famous_people.iter().any(|p| p.name.trim().is_empty()) {
            return Err(Error::schema("famous_people entry without a name"));
        }

        Ok(())
    }
}

/// Profile plus the link derived from its type code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MbtiAnalysis {
    #[serde(flatten)]
    pub profile: MbtiProfile,
    pub official_link: String,
}

impl From<MbtiProfile> for MbtiAnalysis {
    /// The type code is trimmed so the response and the link agree.
    fn from(mut profile: MbtiProfile) -> Self {
        profile.mbti_type = profile.mbti_type.trim().to_string();

        let official_link = official_link(&profile.mbti_type);
        Self {
            profile,
            official_link,
        }
    }
}

/// `https://www.16personalities.com/<type>-personality`, or the site root for an empty type.
pub fn official_link(mbti_type: &str) -> String {
    let slug = mbti_type.trim().to_lowercase();
    if slug.is_empty() {
        PERSONALITY_BASE_URL.to_string()
    } else {
        format!("{}{}-personality", PERSONALITY_BASE_URL, slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiritAnimal {
    pub animal: String,
    /// English name, used as the photo search keyword.
    #[serde(default)]
    pub animal_en: String,
    pub reason: String,
}

impl Validate for SpiritAnimal {
    fn validate(&self) -> Result<()> {
        if self.animal.trim().is_empty() {
            return Err(Error::schema("animal must not be empty"));
        }
        Ok(())
    }
}

impl SpiritAnimal {
    pub fn search_keyword(&self) -> Option<&str> {
        Some(self.animal_en.trim()).filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiritAnimalAnalysis {
    #[serde(flatten)]
    pub animal: SpiritAnimal,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMood {
    pub mood_name: String,
    pub description: String,
    pub palette: Vec<String>,
}

impl Validate for ColorMood {
    fn validate(&self) -> Result<()> {
        exact_len("palette", &self.palette, PALETTE_LEN)?;

        if let Some(bad) = self.palette.iter().find(|c| !is_hex_color(c)) {
            return Err(Error::schema(format!("'{}' is not a hex color", bad)));
        }

        Ok(())
    }
}

fn is_hex_color(candidate: &str) -> bool {
    match candidate.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn exact_len<T>(field: &str, items: &[T], expected: usize) -> Result<()> {
    if items.len() != expected {
        return Err(Error::schema(format!(
            "{} must contain exactly {} entries, got {}",
            field,
            expected,
            items.len()
        )));
    }
    Ok(())
}

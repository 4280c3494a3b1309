use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::str::FromStr;

/// Font weight of a text run, on the CSS 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Numeric(n) => *n,
        }
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "bold" => Ok(FontWeight::Bold),
            _ => s
                .parse::<u16>()
                .map(FontWeight::Numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }
}

// Serialized as the numeric weight so consumers never see the named variants.
impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.numeric_value())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => s.parse().map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_weight() {
        assert_eq!("bold".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert_eq!("Normal".parse::<FontWeight>().unwrap(), FontWeight::Regular);
        assert_eq!("600".parse::<FontWeight>().unwrap(), FontWeight::Numeric(600));
        assert!("heavy-ish".parse::<FontWeight>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "700");
        let weight: FontWeight = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(weight.numeric_value(), 500);
    }
}

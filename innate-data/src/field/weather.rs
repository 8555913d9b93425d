use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A weather condition active over the entire field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum WeatherType {
    #[string = "Rain"]
    Rain,
    #[string = "Sun"]
    #[alias = "Harsh Sunlight"]
    Sun,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
}

use serde::Deserialize;

use crate::persona::Persona;

// Absent fields deserialize as empty strings so the validation gate,
// not the deserializer, produces the user-facing error.
#[derive(Debug, Deserialize)]
pub struct CountForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub persona: Persona,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub question: String,
}

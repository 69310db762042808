// src/desk/intake.rs — Per-session patient intake flow
//
// Collects name, age and reason for visit in that order, one question per
// turn. The first message of a session picks the ward and doubles as the
// reason for visit. Once everything is known the session is complete and
// every further message gets the completion reply again (or a polite
// sign-off when the patient says thanks).

use serde::Serialize;

use super::routing::Ward;

const MAX_NAME_CHARS: usize = 100;
const MAX_AGE: u32 = 120;
const MAX_QUERY_CHARS: usize = 500;

const GRATITUDE_PHRASES: &[&str] = &["thank", "thanks", "thx", "cool", "ok", "okay", "bye"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Query,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientData {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub query: Option<String>,
}

impl PatientData {
    /// First field still missing, in collection order.
    pub fn next_missing(&self) -> Option<Field> {
        if self.name.is_none() {
            Some(Field::Name)
        } else if self.age.is_none() {
            Some(Field::Age)
        } else if self.query.is_none() {
            Some(Field::Query)
        } else {
            None
        }
    }

    /// Fill `field` from a raw message. Invalid input leaves the field unset.
    pub fn fill(&mut self, field: Field, message: &str) {
        match field {
            Field::Name => {
                if let Some(name) = valid_name(message) {
                    self.name = Some(name);
                }
            }
            Field::Age => {
                if let Some(age) = first_number(message).filter(|a| *a <= MAX_AGE) {
                    self.age = Some(age);
                }
            }
            Field::Query => {
                if let Some(query) = valid_query(message) {
                    self.query = Some(query);
                }
            }
        }
    }
}

fn valid_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    let len = name.chars().count();
    let allowed = name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
    (allowed && (1..=MAX_NAME_CHARS).contains(&len)).then(|| name.to_string())
}

fn valid_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    let len = query.chars().count();
    (1..=MAX_QUERY_CHARS).contains(&len).then(|| query.to_string())
}

/// First run of ASCII digits, if it fits in a u32.
fn first_number(raw: &str) -> Option<u32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Details sent to the webhook when a registration completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_query: String,
    pub ward: Ward,
}

/// Result of one intake turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeStep {
    pub reply: String,
    /// Set only on the turn that first completes the registration.
    pub registration: Option<Registration>,
}

#[derive(Debug, Default)]
pub struct IntakeState {
    patient: PatientData,
    ward: Option<Ward>,
    awaiting: Option<Field>,
    complete: bool,
    notified: bool,
    turns: u32,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient(&self) -> &PatientData {
        &self.patient
    }

    pub fn ward(&self) -> Option<Ward> {
        self.ward
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn handle(&mut self, message: &str) -> IntakeStep {
        self.turns += 1;

        if self.ward.is_none() {
            self.ward = Some(Ward::classify(message));
            if self.patient.query.is_none() {
                self.patient.fill(Field::Query, message);
            }
        }

        if let Some(field) = self.awaiting {
            self.patient.fill(field, message);
        }

        let missing = self.patient.next_missing();
        let reply = match missing {
            Some(Field::Name) => {
                let prompt = if self.turns == 1 && self.patient.query.is_some() {
                    "Hello. I have noted your symptoms. To proceed with registration, could you please provide the patient's full name?"
                } else if self.turns == 1 {
                    "Hello. Welcome to the hospital reception. To begin, could you please provide the patient's full name?"
                } else {
                    "Could you please provide the patient's full name?"
                };
                prompt.to_string()
            }
            Some(Field::Age) => "Thank you. Now, could you please provide the patient's age?".to_string(),
            Some(Field::Query) => {
                "Thank you. Could you briefly describe the main symptoms or reason for the visit?"
                    .to_string()
            }
            None => {
                self.complete = true;
                self.completion_reply(message)
            }
        };
        self.awaiting = missing;

        let registration = if self.complete && !self.notified {
            self.notified = true;
            self.registration()
        } else {
            None
        };

        IntakeStep {
            reply,
            registration,
        }
    }

    fn completion_reply(&self, message: &str) -> String {
        let lower = message.to_lowercase();
        if GRATITUDE_PHRASES.iter().any(|p| lower.contains(p)) {
            return "You are welcome. Please proceed to the assigned ward.".to_string();
        }

        let ward = self.ward.unwrap_or(Ward::General).display_name();
        format!(
            "Registration complete.\nPatient {}, age {}, has been assigned to the {}.\nPlease proceed to the {} or wait for further assistance.",
            self.patient.name.as_deref().unwrap_or_default(),
            self.patient.age.unwrap_or_default(),
            ward,
            ward,
        )
    }

    fn registration(&self) -> Option<Registration> {
        Some(Registration {
            patient_name: self.patient.name.clone()?,
            patient_age: self.patient.age?,
            patient_query: self.patient.query.clone()?,
            ward: self.ward.unwrap_or(Ward::General),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::has_completion_marker;

    #[test]
    fn test_full_registration_flow() {
        let mut intake = IntakeState::new();

        let step = intake.handle("I have a fever");
        assert!(step.reply.starts_with("Hello. I have noted your symptoms."));
        assert_eq!(intake.ward(), Some(Ward::General));
        assert_eq!(intake.patient().query.as_deref(), Some("I have a fever"));

        let step = intake.handle("Jane Doe");
        assert_eq!(
            step.reply,
            "Thank you. Now, could you please provide the patient's age?"
        );

        let step = intake.handle("I am 34 years old");
        assert!(has_completion_marker(&step.reply));
        assert_eq!(
            step.reply,
            "Registration complete.\nPatient Jane Doe, age 34, has been assigned to the General Ward.\nPlease proceed to the General Ward or wait for further assistance."
        );
        assert!(intake.is_complete());
        assert_eq!(
            step.registration,
            Some(Registration {
                patient_name: "Jane Doe".into(),
                patient_age: 34,
                patient_query: "I have a fever".into(),
                ward: Ward::General,
            })
        );
    }

    #[test]
    fn test_registration_reported_once() {
        let mut intake = IntakeState::new();
        intake.handle("chest pain");
        intake.handle("John Smith");
        let first = intake.handle("60");
        assert!(first.registration.is_some());

        let again = intake.handle("anything else?");
        assert!(has_completion_marker(&again.reply));
        assert!(again.registration.is_none());
        assert!(again.reply.contains("Emergency Ward"));
    }

    #[test]
    fn test_gratitude_after_completion() {
        let mut intake = IntakeState::new();
        intake.handle("panic attacks");
        intake.handle("Ann Lee");
        intake.handle("25");
        let step = intake.handle("Thanks!");
        assert_eq!(
            step.reply,
            "You are welcome. Please proceed to the assigned ward."
        );
    }

    #[test]
    fn test_invalid_name_is_asked_again() {
        let mut intake = IntakeState::new();
        intake.handle("headache");
        let step = intake.handle("R2-D2");
        assert_eq!(
            step.reply,
            "Could you please provide the patient's full name?"
        );
        assert!(intake.patient().name.is_none());

        let step = intake.handle("Luke Skywalker");
        assert!(step.reply.contains("age"));
    }

    #[test]
    fn test_invalid_age_is_asked_again() {
        let mut intake = IntakeState::new();
        intake.handle("headache");
        intake.handle("Old Timer");
        let step = intake.handle("I am 150");
        assert!(step.reply.contains("age"));
        assert!(intake.patient().age.is_none());

        let step = intake.handle("no digits here");
        assert!(step.reply.contains("age"));
    }

    #[test]
    fn test_first_number_extraction() {
        assert_eq!(first_number("age 42, born 1982"), Some(42));
        assert_eq!(first_number("none"), None);
        assert_eq!(first_number("99999999999999"), None);
    }

    #[test]
    fn test_overlong_first_message_not_used_as_query() {
        let mut intake = IntakeState::new();
        let long = "a".repeat(MAX_QUERY_CHARS + 1);
        let step = intake.handle(&long);
        assert!(step.reply.starts_with("Hello. Welcome to the hospital reception."));
        intake.handle("Jane Doe");
        let step = intake.handle("40");
        assert_eq!(
            step.reply,
            "Thank you. Could you briefly describe the main symptoms or reason for the visit?"
        );
        let step = intake.handle("sore throat");
        assert!(has_completion_marker(&step.reply));
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(valid_name("  Jane Doe "), Some("Jane Doe".into()));
        assert_eq!(valid_name("O'Brien"), None);
        assert_eq!(valid_name(""), None);
        assert_eq!(valid_name(&"a".repeat(101)), None);
    }
}

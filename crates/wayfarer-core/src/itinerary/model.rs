//! Itinerary domain model.
//!
//! Trip preferences arrive through one of three input modes (free-text
//! description, structured form, randomized destination picker). The modes
//! are explicit tagged variants so downstream code matches exhaustively
//! instead of sniffing a string tag.

use crate::error::{Result, WayfarerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trip preferences, tagged by input mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ItineraryInput {
    /// Free-text description of the dream trip.
    Natural { description: String },
    /// Structured form input.
    #[serde(rename_all = "camelCase")]
    Structured {
        destination: String,
        budget: f64,
        duration: String,
        people: u32,
        #[serde(default)]
        special_requests: String,
    },
    /// Destination picked by the randomized globe, same fields as the form.
    #[serde(rename_all = "camelCase")]
    Random {
        destination: String,
        budget: f64,
        duration: String,
        people: u32,
        #[serde(default)]
        special_requests: String,
    },
}

impl ItineraryInput {
    /// The wire name of the input mode.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Natural { .. } => "natural",
            Self::Structured { .. } => "structured",
            Self::Random { .. } => "random",
        }
    }

    /// Validates the input according to its mode.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidInput`] with a user-facing message
    /// when a required field is missing or out of range.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Natural { description } => {
                if description.trim().chars().count() < 10 {
                    return Err(WayfarerError::invalid_input(
                        "Please provide a detailed description of your dream trip (at least 10 characters)",
                    ));
                }
            }
            Self::Structured {
                destination,
                budget,
                duration,
                people,
                ..
            } => {
                if destination.is_empty() || duration.is_empty() {
                    return Err(WayfarerError::invalid_input(
                        "Please fill in all required fields: destination, budget, duration, and number of people",
                    ));
                }
                if *budget <= 0.0 {
                    return Err(WayfarerError::invalid_input("Budget must be greater than 0"));
                }
                if *people == 0 {
                    return Err(WayfarerError::invalid_input(
                        "Number of people must be greater than 0",
                    ));
                }
            }
            Self::Random {
                destination,
                budget,
                duration,
                people,
                ..
            } => {
                if destination.is_empty() {
                    return Err(WayfarerError::invalid_input(
                        "Please spin the globe to select a destination first",
                    ));
                }
                if duration.is_empty() {
                    return Err(WayfarerError::invalid_input(
                        "Please fill in budget, duration, and number of people",
                    ));
                }
                if *budget <= 0.0 {
                    return Err(WayfarerError::invalid_input("Budget must be greater than 0"));
                }
                if *people == 0 {
                    return Err(WayfarerError::invalid_input(
                        "Number of people must be greater than 0",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Renders the natural-language travel request sent to the generation
    /// service.
    pub fn travel_request(&self) -> String {
        match self {
            Self::Natural { description } => description.clone(),
            Self::Structured {
                destination,
                budget,
                duration,
                people,
                special_requests,
            }
            | Self::Random {
                destination,
                budget,
                duration,
                people,
                special_requests,
            } => {
                let base = format!(
                    "I want to plan a trip to {destination} for {duration} days. \
                     I am traveling with {people} people with a budget of ${budget}"
                );
                if special_requests.is_empty() {
                    base
                } else {
                    format!("{base}. Attach importance to {special_requests}")
                }
            }
        }
    }

    /// Derives a display title from the input.
    pub fn title(&self) -> String {
        match self {
            Self::Natural { description } => {
                let words: Vec<&str> = description.split_whitespace().collect();
                if words.len() <= 6 {
                    words.join(" ")
                } else {
                    format!("{}...", words[..6].join(" "))
                }
            }
            Self::Structured {
                destination,
                duration,
                people,
                ..
            }
            | Self::Random {
                destination,
                duration,
                people,
                ..
            } => format!("{destination} - {duration} - {people} people"),
        }
    }
}

/// A generated itinerary with its provenance, as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItinerary {
    /// Unique itinerary identifier.
    pub id: String,
    /// Display title derived from the input.
    pub title: String,
    /// The trip preferences the itinerary was generated from.
    pub input: ItineraryInput,
    /// The generated itinerary document, as markdown.
    pub markdown: String,
    /// When the itinerary was generated.
    pub created_at: DateTime<Utc>,
}

impl SavedItinerary {
    /// Wraps a generated markdown document with its input, deriving id and
    /// title.
    pub fn new(input: ItineraryInput, markdown: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: input.title(),
            input,
            markdown: markdown.into(),
            created_at: Utc::now(),
        }
    }

    /// Renders the context block handed to the chat service so replies stay
    /// grounded in this itinerary.
    pub fn context_text(&self) -> String {
        format!(
            "\nItinerary Context:\nTitle: {}\nInput Method: {}\nCreated: {}\n\nItinerary Details:\n{}\n\nPlease use this itinerary information to provide relevant and specific answers to the user's questions.\n",
            self.title,
            self.input.method_name(),
            self.created_at.format("%Y-%m-%d"),
            self.markdown,
        )
    }
}

//! Enumeration types for the reservation engine
//!
//! This module contains the closed enumerations shared by the catalog and the
//! booking wizard: amenity categories, wizard states, guest fields and output
//! formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation category of a room amenity
///
/// The category only selects iconography; the concrete glyph is left to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    /// Wireless internet
    Wifi,
    /// Television
    Tv,
    /// Mini bar, coffee and other drinks
    Beverage,
    /// Air conditioning
    Climate,
    /// Dining and food service
    Dining,
    /// Anything without a more specific match
    Generic,
}

impl AmenityCategory {
    /// Categories with keyword sets, in match priority order
    const PRIORITY: [(AmenityCategory, &'static [&'static str]); 5] = [
        (AmenityCategory::Wifi, &["wifi"]),
        (AmenityCategory::Tv, &["tv"]),
        (AmenityCategory::Beverage, &["bar", "coffee"]),
        (AmenityCategory::Climate, &["ac", "air"]),
        (AmenityCategory::Dining, &["dining", "food"]),
    ];

    /// Classify a free-text amenity label
    ///
    /// Matching is a case-insensitive substring search; the first category in
    /// priority order with a matching keyword wins, otherwise `Generic`.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        Self::PRIORITY
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
            .map(|(category, _)| *category)
            .unwrap_or(AmenityCategory::Generic)
    }

    /// Keywords that select this category (empty for `Generic`)
    pub fn keywords(&self) -> &'static [&'static str] {
        Self::PRIORITY
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for AmenityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmenityCategory::Wifi => write!(f, "wifi"),
            AmenityCategory::Tv => write!(f, "tv"),
            AmenityCategory::Beverage => write!(f, "beverage"),
            AmenityCategory::Climate => write!(f, "climate"),
            AmenityCategory::Dining => write!(f, "dining"),
            AmenityCategory::Generic => write!(f, "generic"),
        }
    }
}

/// State of the booking wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardState {
    /// The guest is editing dates, occupancy and contact details
    Configuring,
    /// The finalized configuration is with the submission sink
    Submitting,
    /// The sink accepted the booking; terminal for the session
    Confirmed,
}

impl WizardState {
    /// Dialog step shown for this state (1: details form, 2: success screen)
    pub fn step(&self) -> u8 {
        match self {
            WizardState::Configuring | WizardState::Submitting => 1,
            WizardState::Confirmed => 2,
        }
    }

    /// Whether configuration fields may still change
    pub fn is_editable(&self) -> bool {
        *self == WizardState::Configuring
    }

    /// Whether no further transition can happen
    pub fn is_terminal(&self) -> bool {
        *self == WizardState::Confirmed
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardState::Configuring => write!(f, "Configuring"),
            WizardState::Submitting => write!(f, "Submitting"),
            WizardState::Confirmed => write!(f, "Confirmed"),
        }
    }
}

/// Fields that must be filled in before a booking can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestField {
    /// Arrival date
    CheckIn,
    /// Departure date
    CheckOut,
    /// Full name of the guest
    GuestName,
    /// Contact phone number
    GuestPhone,
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestField::CheckIn => write!(f, "check_in"),
            GuestField::CheckOut => write!(f, "check_out"),
            GuestField::GuestName => write!(f, "guest_name"),
            GuestField::GuestPhone => write!(f, "guest_phone"),
        }
    }
}

/// Output format for the command line driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON documents
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_classification() {
        assert_eq!(AmenityCategory::classify("Free WiFi"), AmenityCategory::Wifi);
        assert_eq!(AmenityCategory::classify("Smart TV"), AmenityCategory::Tv);
        assert_eq!(AmenityCategory::classify("Mini Bar"), AmenityCategory::Beverage);
        assert_eq!(AmenityCategory::classify("Coffee Maker"), AmenityCategory::Beverage);
        assert_eq!(AmenityCategory::classify("AC"), AmenityCategory::Climate);
        assert_eq!(AmenityCategory::classify("Air Conditioning"), AmenityCategory::Climate);
        assert_eq!(AmenityCategory::classify("In-room Dining"), AmenityCategory::Dining);
        assert_eq!(AmenityCategory::classify("Food Service"), AmenityCategory::Dining);
        assert_eq!(AmenityCategory::classify("King Bed"), AmenityCategory::Generic);
        assert_eq!(AmenityCategory::classify(""), AmenityCategory::Generic);
    }

    #[test]
    fn test_amenity_priority_order() {
        // wifi outranks tv, tv outranks beverage
        assert_eq!(AmenityCategory::classify("WiFi TV"), AmenityCategory::Wifi);
        assert_eq!(AmenityCategory::classify("TV Bar"), AmenityCategory::Tv);
        // "bar" outranks the "ac" inside "Terrace"
        assert_eq!(AmenityCategory::classify("Terrace Bar"), AmenityCategory::Beverage);
    }

    #[test]
    fn test_generic_has_no_keywords() {
        assert!(AmenityCategory::Generic.keywords().is_empty());
        assert_eq!(AmenityCategory::Beverage.keywords(), &["bar", "coffee"]);
    }

    #[test]
    fn test_wizard_state_steps() {
        assert_eq!(WizardState::Configuring.step(), 1);
        assert_eq!(WizardState::Submitting.step(), 1);
        assert_eq!(WizardState::Confirmed.step(), 2);
        assert!(WizardState::Configuring.is_editable());
        assert!(!WizardState::Submitting.is_editable());
        assert!(WizardState::Confirmed.is_terminal());
    }

    #[test]
    fn test_guest_field_display() {
        assert_eq!(GuestField::GuestPhone.to_string(), "guest_phone");
        assert_eq!(GuestField::CheckIn.to_string(), "check_in");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}

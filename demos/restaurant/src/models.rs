//! Restaurant domain types.

use autoconvert::AutoConvert;
use std::collections::HashMap;

// ============================================================================
// Restaurant
// ============================================================================

/// Requesting a capability twice still generates one implementation.
#[derive(Debug, Clone, PartialEq, AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize, Serialize))]
pub struct Restaurant {
    pub price: f32,
}

include!(concat!(env!("OUT_DIR"), "/RestaurantAutoConvert.rs"));

// ============================================================================
// Venue and its parts
// ============================================================================

#[derive(Debug, Clone, PartialEq, AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize), naming = "pascal_case")]
pub struct Address {
    pub city: String,
    pub zip_code: Option<String>,
}

include!(concat!(env!("OUT_DIR"), "/AddressAutoConvert.rs"));

/// Built through `Manager::new` on deserialization.
#[derive(Debug, Clone, PartialEq, AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize), constructor = "new")]
pub struct Manager {
    pub name: String,
    pub years: u32,
}

impl Manager {
    pub fn new(name: String, years: u32) -> Self {
        Self { name, years }
    }
}

include!(concat!(env!("OUT_DIR"), "/ManagerAutoConvert.rs"));

#[derive(Debug, Clone, PartialEq, AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize, Greet), naming = "camel_case")]
pub struct Venue {
    pub display_name: String,
    #[auto_convert(nested)]
    pub address: Address,
    pub manager: Option<Manager>,
    pub tags: Vec<String>,
    pub ratings: HashMap<String, u8>,
    pub phone: Option<String>,
}

include!(concat!(env!("OUT_DIR"), "/VenueAutoConvert.rs"));

// ============================================================================
// Greeting only
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, AutoConvert)]
#[auto_convert(capabilities(Greet), suffix = "Greeting")]
pub struct Host;

include!(concat!(env!("OUT_DIR"), "/HostGreeting.rs"));

/// Declares no capability, so nothing is generated for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AutoConvert)]
pub struct Marker {}

//! Fixed selectable values supplied to the profile step when it mounts.

/// Country offered by the profile step.
pub const COUNTRY: &str = "India";

/// Calling-code prefix the phone input starts with.
pub const CALLING_CODE_PREFIX: &str = "+91 ";

/// Cities offered by the profile step, in display order.
pub const CITIES: [&str; 12] = [
    "Kolkata",
    "Durgapur",
    "Mumbai",
    "Chennai",
    "Bengaluru",
    "Delhi",
    "Pune",
    "Hyderabad",
    "Kochi",
    "Chandigarh",
    "Jaipur",
    "Noida",
];

/// Read-only selection lists and defaults for the profile step.
///
/// ## Invariants
/// - `cities` is non-empty; its first entry is the default city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceData {
    country: &'static str,
    calling_code_prefix: &'static str,
    cities: &'static [&'static str],
}

impl ReferenceData {
    /// Country shown in the single-entry country selection.
    #[must_use]
    pub const fn country(&self) -> &'static str {
        self.country
    }

    /// Prefix pre-filled into the phone input.
    #[must_use]
    pub const fn calling_code_prefix(&self) -> &'static str {
        self.calling_code_prefix
    }

    /// Ordered city choices.
    #[must_use]
    pub const fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    /// City selected when the profile step mounts.
    #[must_use]
    pub const fn default_city(&self) -> &'static str {
        match self.cities {
            [first, ..] => *first,
            [] => "",
        }
    }

    /// Find a listed city by name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::ReferenceData;
    ///
    /// let data = ReferenceData::default();
    /// assert_eq!(data.find_city("pune"), Some("Pune"));
    /// assert_eq!(data.find_city("Paris"), None);
    /// ```
    #[must_use]
    pub fn find_city(&self, name: &str) -> Option<&'static str> {
        let wanted = name.trim();
        self.cities
            .iter()
            .copied()
            .find(|city| city.eq_ignore_ascii_case(wanted))
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            country: COUNTRY,
            calling_code_prefix: CALLING_CODE_PREFIX,
            cities: &CITIES,
        }
    }
}

//! Personal and government-ID details collected by the second signup step.

use serde::Serialize;

use super::normalize::{capitalize_name, normalize_pan};
use super::reference_data::ReferenceData;

/// Raw profile details as typed on the second step.
///
/// Field order matches the serialised record handed to the display page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileInput {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Phone number including the calling code.
    pub phone: String,
    /// Selected country.
    pub country: String,
    /// Selected city.
    pub city: String,
    /// PAN identifier.
    pub pan: String,
    /// Aadhar identifier.
    pub aadhar: String,
}

impl ProfileInput {
    /// Profile values present when the step mounts.
    ///
    /// The phone starts with the calling-code prefix and the selections start
    /// on the first listed country and city; every other input is empty.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::{ProfileInput, ReferenceData};
    ///
    /// let profile = ProfileInput::mounted(&ReferenceData::default());
    /// assert_eq!(profile.phone, "+91 ");
    /// assert_eq!(profile.country, "India");
    /// assert_eq!(profile.city, "Kolkata");
    /// assert!(profile.firstname.is_empty());
    /// ```
    #[must_use]
    pub fn mounted(reference: &ReferenceData) -> Self {
        Self {
            phone: reference.calling_code_prefix().to_owned(),
            country: reference.country().to_owned(),
            city: reference.default_city().to_owned(),
            ..Self::default()
        }
    }

    /// Canonical form stored in the session record.
    ///
    /// Names become first letter upper-case with the rest lower-case; the PAN
    /// is upper-cased. Other inputs are kept as typed.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            firstname: capitalize_name(&self.firstname),
            lastname: capitalize_name(&self.lastname),
            pan: normalize_pan(&self.pan),
            ..self
        }
    }
}

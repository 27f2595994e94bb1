// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Player registration payload and the choice lists used by the form.

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

choices! {
    /// Gender options accepted by the backend.
    pub enum Gender {
        Male => ("M", "Male"),
        Female => ("F", "Female"),
        Other => ("O", "Other"),
    }
}

choices! {
    /// Occupation options accepted by the backend.
    pub enum Occupation {
        Student => ("Student", "Student"),
        Business => ("Business", "Own business"),
        Government => ("Government", "Government"),
        NonProfit => ("Non-profit", "NGO / NPO"),
        Other => ("Other", "Other"),
        Unemployed => ("Unemployed", "Unemployed"),
    }
}

choices! {
    /// Indian states and union territories.
    pub enum StateUt {
        AndamanNicobar => ("AN", "Andaman and Nicobar Islands"),
        AndhraPradesh => ("AP", "Andhra Pradesh"),
        ArunachalPradesh => ("AR", "Arunachal Pradesh"),
        Assam => ("AS", "Assam"),
        Bihar => ("BR", "Bihar"),
        Chandigarh => ("CDG", "Chandigarh"),
        Chhattisgarh => ("CG", "Chhattisgarh"),
        DadraNagarHaveli => ("DNH", "Dadra and Nagar Haveli"),
        DamanDiu => ("DD", "Daman and Diu"),
        Delhi => ("DL", "Delhi"),
        Goa => ("GA", "Goa"),
        Gujarat => ("GJ", "Gujarat"),
        Haryana => ("HR", "Haryana"),
        HimachalPradesh => ("HP", "Himachal Pradesh"),
        JammuKashmir => ("JK", "Jammu and Kashmir"),
        Jharkhand => ("JH", "Jharkhand"),
        Karnataka => ("KA", "Karnataka"),
        Kerala => ("KL", "Kerala"),
        Ladakh => ("LK", "Ladakh"),
        Lakshadweep => ("LD", "Lakshadweep"),
        MadhyaPradesh => ("MP", "Madhya Pradesh"),
        Maharashtra => ("MH", "Maharashtra"),
        Manipur => ("MN", "Manipur"),
        Meghalaya => ("ML", "Meghalaya"),
        Mizoram => ("MZ", "Mizoram"),
        Nagaland => ("NL", "Nagaland"),
        Odisha => ("OR", "Odisha"),
        Puducherry => ("PY", "Puducherry"),
        Punjab => ("PB", "Punjab"),
        Rajasthan => ("RJ", "Rajasthan"),
        Sikkim => ("SK", "Sikkim"),
        TamilNadu => ("TN", "Tamil Nadu"),
        Telangana => ("TL", "Telangana"),
        Tripura => ("TR", "Tripura"),
        UttarPradesh => ("UP", "Uttar Pradesh"),
        Uttarakhand => ("UK", "Uttarakhand"),
        WestBengal => ("WB", "West Bengal"),
    }
}

/// JSON body for `POST /api/registration`.
///
/// Optional free-text fields are sent as `null` when empty so the backend
/// stores them as missing rather than blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub gender: Gender,
    /// Only present when `gender` is [`Gender::Other`].
    pub other_gender: Option<String>,
    pub city: String,
    /// Always `None` when `not_in_india` is set.
    pub state_ut: Option<StateUt>,
    pub not_in_india: bool,
    pub team_name: String,
    pub occupation: Occupation,
    pub educational_institution: Option<String>,
    pub india_ultimate_profile: Option<String>,
}

/// Return `None` for blank input, otherwise the trimmed text.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Accept only absolute http/https URLs with a host.
pub fn is_profile_url(value: &str) -> bool {
    Url::parse(value.trim())
        .ok()
        .is_some_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RegistrationRequest {
        RegistrationRequest {
            first_name: "Nora".into(),
            last_name: "Quinn".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone: "+1234567890".into(),
            gender: Gender::Female,
            other_gender: None,
            city: "Bangalore".into(),
            state_ut: Some(StateUt::Karnataka),
            not_in_india: false,
            team_name: String::new(),
            occupation: Occupation::NonProfit,
            educational_institution: None,
            india_ultimate_profile: None,
        }
    }

    #[test]
    fn serializes_with_backend_field_names_and_codes() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["date_of_birth"], json!("1990-01-01"));
        assert_eq!(value["gender"], json!("F"));
        assert_eq!(value["state_ut"], json!("KA"));
        assert_eq!(value["occupation"], json!("Non-profit"));
        assert_eq!(value["other_gender"], json!(null));
        assert_eq!(value["not_in_india"], json!(false));
    }

    #[test]
    fn state_list_matches_backend_codes() {
        assert_eq!(StateUt::ALL.len(), 37);
        assert_eq!(StateUt::from_code("CDG"), Some(StateUt::Chandigarh));
        assert_eq!(StateUt::from_code("XX"), None);
        assert_eq!(StateUt::WestBengal.label(), "West Bengal");
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" IIT Madras "), Some("IIT Madras".into()));
    }

    #[test]
    fn profile_url_requires_http_scheme_and_host() {
        assert!(is_profile_url("https://indiaultimate.org/en-in/u/nora"));
        assert!(!is_profile_url("indiaultimate.org/u/nora"));
        assert!(!is_profile_url("ftp://indiaultimate.org"));
    }
}

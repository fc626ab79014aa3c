//! Field validators for identifier parameters.
//!
//! Pure, collection-independent functions. Each takes a raw segment value,
//! checks one field-specific rule, and returns the normalized value or a
//! [`GatewayError::InvalidParameter`] whose message names the field and the
//! violated constraint. Collection grammars in [`crate::identifier`] compose
//! these; nothing here performs I/O.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::GatewayError;

/// Inclusive congress-number range accepted for path fields.
///
/// The upstream archive starts at the 93rd Congress; 118 is the newest
/// congress the gateway serves. Applied uniformly to every collection.
pub const CONGRESS_RANGE: (u16, u16) = (93, 118);

/// Inclusive district range; 0 denotes an at-large district.
pub const DISTRICT_RANGE: (u16, u16) = (0, 53);

/// The 56 recognized two-letter state, territory, and DC codes.
pub const STATE_CODES: [&str; 56] = [
    "AL", "AK", "AS", "AZ", "AR", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "GU", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MP", "MT",
    "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "PR", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "VI", "WA", "WV", "WI", "WY",
];

fn invalid(message: String) -> GatewayError {
    GatewayError::InvalidParameter(message)
}

/// Congressional chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Senate => "senate",
        }
    }
}

/// The eight bill type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillType {
    Hr,
    S,
    Hjres,
    Sjres,
    Hconres,
    Sconres,
    Hres,
    Sres,
}

impl BillType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::S => "s",
            Self::Hjres => "hjres",
            Self::Sjres => "sjres",
            Self::Hconres => "hconres",
            Self::Sconres => "sconres",
            Self::Hres => "hres",
            Self::Sres => "sres",
        }
    }
}

/// Amendment type codes (`hamdt`/`samdt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmendmentType {
    Hamdt,
    Samdt,
}

impl AmendmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hamdt => "hamdt",
            Self::Samdt => "samdt",
        }
    }
}

/// Law categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LawType {
    Public,
    Private,
}

impl LawType {
    /// Path segment used by the upstream (`pub`/`priv`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "pub",
            Self::Private => "priv",
        }
    }
}

/// Committee report type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Hrpt,
    Srpt,
    Erpt,
}

impl ReportType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hrpt => "hrpt",
            Self::Srpt => "srpt",
            Self::Erpt => "erpt",
        }
    }
}

/// Validate a congress number against [`CONGRESS_RANGE`].
///
/// # Errors
/// `InvalidParameter` when the number falls outside the range.
#[allow(clippy::cast_possible_truncation)] // range-checked against a u16 bound
pub fn congress(value: u32) -> Result<u16, GatewayError> {
    let (lo, hi) = CONGRESS_RANGE;
    if value < u32::from(lo) || value > u32::from(hi) {
        return Err(invalid(format!(
            "congress {value} is out of range: must be between {lo} and {hi}"
        )));
    }
    Ok(value as u16)
}

/// Validate and normalize a two-letter state/territory code.
///
/// Case-insensitive on input, uppercase on output.
///
/// # Errors
/// `InvalidParameter` when the code is not one of the 56 recognized codes.
pub fn state_code(value: &str) -> Result<String, GatewayError> {
    let upper = value.to_ascii_uppercase();
    if STATE_CODES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(invalid(format!(
            "state code '{value}' is not a recognized US state or territory code"
        )))
    }
}

/// Validate a district number against [`DISTRICT_RANGE`].
///
/// # Errors
/// `InvalidParameter` when the number exceeds the upper bound.
#[allow(clippy::cast_possible_truncation)] // range-checked against a u16 bound
pub fn district(value: u32) -> Result<u16, GatewayError> {
    let (lo, hi) = DISTRICT_RANGE;
    if value < u32::from(lo) || value > u32::from(hi) {
        return Err(invalid(format!(
            "district {value} is out of range: must be between {lo} and {hi} (0 = at-large)"
        )));
    }
    Ok(value as u16)
}

/// Validate and normalize a bioguide-style member id.
///
/// Exactly one ASCII letter followed by six digits; case-insensitive on
/// input, uppercase on output.
///
/// # Errors
/// `InvalidParameter` on any other length or character class.
pub fn bioguide_id(value: &str) -> Result<String, GatewayError> {
    let upper = value.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if well_formed {
        Ok(upper)
    } else {
        Err(invalid(format!(
            "bioguide id '{value}' must be one letter followed by six digits"
        )))
    }
}

/// Validate a chamber name.
///
/// # Errors
/// `InvalidParameter` unless the value is `house` or `senate`.
pub fn chamber(value: &str) -> Result<Chamber, GatewayError> {
    match value.to_ascii_lowercase().as_str() {
        "house" => Ok(Chamber::House),
        "senate" => Ok(Chamber::Senate),
        _ => Err(invalid(format!(
            "chamber '{value}' must be 'house' or 'senate'"
        ))),
    }
}

/// Validate a bill type code.
///
/// # Errors
/// `InvalidParameter` unless the value is one of the eight codes.
pub fn bill_type(value: &str) -> Result<BillType, GatewayError> {
    match value.to_ascii_lowercase().as_str() {
        "hr" => Ok(BillType::Hr),
        "s" => Ok(BillType::S),
        "hjres" => Ok(BillType::Hjres),
        "sjres" => Ok(BillType::Sjres),
        "hconres" => Ok(BillType::Hconres),
        "sconres" => Ok(BillType::Sconres),
        "hres" => Ok(BillType::Hres),
        "sres" => Ok(BillType::Sres),
        _ => Err(invalid(format!(
            "bill type '{value}' must be one of hr, s, hjres, sjres, hconres, sconres, hres, sres"
        ))),
    }
}

/// Validate an amendment type code, accepting longhand aliases.
///
/// # Errors
/// `InvalidParameter` unless the value maps onto `hamdt` or `samdt`.
pub fn amendment_type(value: &str) -> Result<AmendmentType, GatewayError> {
    match value.to_ascii_lowercase().as_str() {
        "hamdt" | "house-amendment" => Ok(AmendmentType::Hamdt),
        "samdt" | "senate-amendment" => Ok(AmendmentType::Samdt),
        _ => Err(invalid(format!(
            "amendment type '{value}' must be hamdt or samdt"
        ))),
    }
}

/// Validate a law type, accepting abbreviation aliases.
///
/// # Errors
/// `InvalidParameter` unless the value maps onto `public` or `private`.
pub fn law_type(value: &str) -> Result<LawType, GatewayError> {
    match value.to_ascii_lowercase().as_str() {
        "public" | "pub" => Ok(LawType::Public),
        "private" | "priv" => Ok(LawType::Private),
        _ => Err(invalid(format!(
            "law type '{value}' must be 'public' or 'private'"
        ))),
    }
}

/// Validate a committee report type code.
///
/// # Errors
/// `InvalidParameter` unless the value is `hrpt`, `srpt`, or `erpt`.
pub fn report_type(value: &str) -> Result<ReportType, GatewayError> {
    match value.to_ascii_lowercase().as_str() {
        "hrpt" => Ok(ReportType::Hrpt),
        "srpt" => Ok(ReportType::Srpt),
        "erpt" => Ok(ReportType::Erpt),
        _ => Err(invalid(format!(
            "report type '{value}' must be one of hrpt, srpt, erpt"
        ))),
    }
}

/// Validate and normalize a committee code (`[a-z]{2,4}[0-9]{2}`,
/// case-insensitive; lowercase on output).
///
/// # Errors
/// `InvalidParameter` when the code does not match the format.
pub fn committee_code(value: &str) -> Result<String, GatewayError> {
    let lower = value.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let well_formed = (4..=6).contains(&bytes.len())
        && bytes[..bytes.len() - 2]
            .iter()
            .all(u8::is_ascii_lowercase)
        && bytes[bytes.len() - 2..].iter().all(u8::is_ascii_digit);
    if well_formed {
        Ok(lower)
    } else {
        Err(invalid(format!(
            "committee code '{value}' must be two to four letters followed by two digits"
        )))
    }
}

/// Validate a house communication type code.
///
/// # Errors
/// `InvalidParameter` unless the value is one of `ec`, `ml`, `pm`, `pt`.
pub fn house_communication_type(value: &str) -> Result<String, GatewayError> {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "ec" | "ml" | "pm" | "pt" => Ok(lower),
        _ => Err(invalid(format!(
            "house communication type '{value}' must be one of ec, ml, pm, pt"
        ))),
    }
}

/// Validate a senate communication type code.
///
/// # Errors
/// `InvalidParameter` unless the value is `ec` or `pom`.
pub fn senate_communication_type(value: &str) -> Result<String, GatewayError> {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "ec" | "pom" => Ok(lower),
        _ => Err(invalid(format!(
            "senate communication type '{value}' must be 'ec' or 'pom'"
        ))),
    }
}

/// Validate a calendar date triple.
///
/// Year, month, and day are range-checked, then the triple must round-trip
/// through calendar construction (rejects e.g. Feb 30).
///
/// # Errors
/// `InvalidParameter` naming the out-of-range component, or the full triple
/// when the calendar rejects it.
#[allow(clippy::cast_possible_wrap)] // year is range-checked well below i32::MAX
pub fn calendar_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, GatewayError> {
    if !(1900..=2100).contains(&year) {
        return Err(invalid(format!(
            "year {year} is out of range: must be between 1900 and 2100"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(invalid(format!(
            "month {month} is out of range: must be between 1 and 12"
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(invalid(format!(
            "day {day} is out of range: must be between 1 and 31"
        )));
    }
    #[allow(clippy::cast_possible_wrap)]
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        invalid(format!(
            "{year:04}-{month:02}-{day:02} is not a valid calendar date"
        ))
    })
}

/// Validate a positive ordinal (vote numbers, requirement numbers, nominee
/// ordinals, record volumes and issues).
///
/// # Errors
/// `InvalidParameter` when the value is zero.
pub fn positive(value: u32, field: &str) -> Result<u32, GatewayError> {
    if value == 0 {
        return Err(invalid(format!("{field} must be a positive integer")));
    }
    Ok(value)
}

/// Validate and normalize a CRS report number (e.g. `R47175`).
///
/// # Errors
/// `InvalidParameter` when empty or containing characters outside ASCII
/// alphanumerics and dashes.
pub fn crs_report_number(value: &str) -> Result<String, GatewayError> {
    let upper = value.to_ascii_uppercase();
    let well_formed = !upper.is_empty()
        && upper
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-');
    if well_formed {
        Ok(upper)
    } else {
        Err(invalid(format!(
            "CRS report number '{value}' must be alphanumeric (dashes allowed)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn congress_boundaries() {
        let cases = [
            (92u32, false, "below lower bound"),
            (93, true, "lower bound inclusive"),
            (110, true, "mid range"),
            (118, true, "upper bound inclusive"),
            (119, false, "above upper bound"),
            (50, false, "far below range"),
        ];

        for (value, should_pass, desc) in cases {
            let result = congress(value);
            assert_eq!(result.is_ok(), should_pass, "case '{desc}': {result:?}");
        }
    }

    #[test]
    fn congress_error_names_value_and_bounds() {
        let message = congress(50).unwrap_err().to_string();
        assert!(message.contains("50"), "{message}");
        assert!(message.contains("93 and 118"), "{message}");
    }

    #[test]
    fn state_code_accepts_all_56_case_insensitively() {
        assert_eq!(STATE_CODES.len(), 56);
        for code in STATE_CODES {
            assert_eq!(state_code(code).unwrap(), code);
            assert_eq!(state_code(&code.to_ascii_lowercase()).unwrap(), code);
        }
    }

    #[test]
    fn state_code_rejects_unknown() {
        let cases = ["XX", "ZZ", "USA", "A", ""];
        for value in cases {
            let result = state_code(value);
            assert!(result.is_err(), "'{value}' should be rejected");
            assert!(result.unwrap_err().to_string().contains("state code"));
        }
    }

    #[test]
    fn district_boundaries() {
        let cases = [
            (0u32, true, "at-large district"),
            (1, true, "first district"),
            (53, true, "upper bound inclusive"),
            (54, false, "above upper bound"),
            (60, false, "legacy loose bound rejected"),
        ];

        for (value, should_pass, desc) in cases {
            let result = district(value);
            assert_eq!(result.is_ok(), should_pass, "case '{desc}': {result:?}");
        }
    }

    #[test]
    fn bioguide_boundaries() {
        let cases = [
            ("P000197", true, "canonical form"),
            ("p000197", true, "lowercase input normalized"),
            ("P0001977", false, "seven digits"),
            ("PP000197", false, "two letters"),
            ("P00019", false, "five digits"),
            ("0000197", false, "leading digit"),
            ("P00O197", false, "letter among digits"),
            ("", false, "empty"),
        ];

        for (value, should_pass, desc) in cases {
            let result = bioguide_id(value);
            assert_eq!(result.is_ok(), should_pass, "case '{desc}': {result:?}");
        }
        assert_eq!(bioguide_id("p000197").unwrap(), "P000197");
    }

    #[test]
    fn chamber_parses_both_values() {
        assert_eq!(chamber("house").unwrap(), Chamber::House);
        assert_eq!(chamber("SENATE").unwrap(), Chamber::Senate);
        assert!(chamber("assembly").is_err());
    }

    #[test]
    fn bill_type_accepts_all_eight_codes() {
        let codes = [
            "hr", "s", "hjres", "sjres", "hconres", "sconres", "hres", "sres",
        ];
        for code in codes {
            assert_eq!(bill_type(code).unwrap().as_str(), code);
        }
        assert!(bill_type("hb").is_err());
    }

    #[test]
    fn amendment_type_accepts_aliases() {
        assert_eq!(amendment_type("hamdt").unwrap(), AmendmentType::Hamdt);
        assert_eq!(
            amendment_type("house-amendment").unwrap(),
            AmendmentType::Hamdt
        );
        assert_eq!(
            amendment_type("senate-amendment").unwrap(),
            AmendmentType::Samdt
        );
        assert!(amendment_type("amdt").is_err());
    }

    #[test]
    fn law_type_accepts_aliases() {
        assert_eq!(law_type("public").unwrap(), LawType::Public);
        assert_eq!(law_type("pub").unwrap(), LawType::Public);
        assert_eq!(law_type("priv").unwrap(), LawType::Private);
        assert!(law_type("local").is_err());
    }

    #[test]
    fn committee_code_boundaries() {
        let cases = [
            ("hsag00", true, "four letters two digits"),
            ("HSAG00", true, "uppercase input normalized"),
            ("ss00", true, "two letters two digits"),
            ("h00", false, "single letter"),
            ("hsagr00", false, "five letters"),
            ("hsag0", false, "single digit"),
            ("hsag000", false, "three digits"),
            ("hs-g00", false, "punctuation"),
        ];

        for (value, should_pass, desc) in cases {
            let result = committee_code(value);
            assert_eq!(result.is_ok(), should_pass, "case '{desc}': {result:?}");
        }
        assert_eq!(committee_code("HSAG00").unwrap(), "hsag00");
    }

    #[test]
    fn communication_types_are_chamber_specific() {
        for code in ["ec", "ml", "pm", "pt"] {
            assert!(house_communication_type(code).is_ok());
        }
        assert!(house_communication_type("pom").is_err());

        for code in ["ec", "pom"] {
            assert!(senate_communication_type(code).is_ok());
        }
        assert!(senate_communication_type("ml").is_err());
    }

    #[test]
    fn calendar_date_boundaries() {
        let cases = [
            ((2023u32, 6u32, 15u32), true, "ordinary date"),
            ((1900, 1, 1), true, "lower year bound"),
            ((2100, 12, 31), true, "upper year bound"),
            ((1899, 6, 15), false, "year below range"),
            ((2101, 6, 15), false, "year above range"),
            ((2023, 13, 1), false, "month above range"),
            ((2023, 0, 1), false, "month zero"),
            ((2023, 2, 30), false, "calendar rejects Feb 30"),
            ((2023, 4, 31), false, "calendar rejects Apr 31"),
            ((2024, 2, 29), true, "leap day accepted"),
            ((2023, 2, 29), false, "non-leap Feb 29 rejected"),
        ];

        for ((y, m, d), should_pass, desc) in cases {
            let result = calendar_date(y, m, d);
            assert_eq!(result.is_ok(), should_pass, "case '{desc}': {result:?}");
        }
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(positive(0, "vote number").is_err());
        assert_eq!(positive(7, "vote number").unwrap(), 7);
        assert!(positive(0, "ordinal")
            .unwrap_err()
            .to_string()
            .contains("ordinal"));
    }

    #[test]
    fn crs_report_number_normalizes() {
        assert_eq!(crs_report_number("r47175").unwrap(), "R47175");
        assert!(crs_report_number("").is_err());
        assert!(crs_report_number("R 47175").is_err());
    }

    proptest! {
        #[test]
        fn bioguide_accepts_exactly_letter_plus_six_digits(s in "[A-Za-z][0-9]{6}") {
            prop_assert!(bioguide_id(&s).is_ok());
        }

        #[test]
        fn bioguide_rejects_wrong_lengths(s in "[A-Z][0-9]{0,5}") {
            prop_assert!(bioguide_id(&s).is_err());
        }

        #[test]
        fn state_code_never_panics(s in ".*") {
            let _ = state_code(&s);
        }
    }
}

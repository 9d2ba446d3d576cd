//! Static table of countries with public holiday data.

use serde::Serialize;

use crate::error::ClientError;

/// A selectable country: ISO 3166-1 alpha-2 code and English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

const fn country(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

/// Countries supported by the holiday API, sorted by code.
#[rustfmt::skip]
pub const COUNTRIES: &[Country] = &[
    country("AD", "Andorra"),
    country("AL", "Albania"),
    country("AM", "Armenia"),
    country("AR", "Argentina"),
    country("AT", "Austria"),
    country("AU", "Australia"),
    country("AX", "Åland Islands"),
    country("BA", "Bosnia and Herzegovina"),
    country("BB", "Barbados"),
    country("BE", "Belgium"),
    country("BG", "Bulgaria"),
    country("BJ", "Benin"),
    country("BO", "Bolivia"),
    country("BR", "Brazil"),
    country("BS", "Bahamas"),
    country("BW", "Botswana"),
    country("BY", "Belarus"),
    country("BZ", "Belize"),
    country("CA", "Canada"),
    country("CD", "DR Congo"),
    country("CG", "Congo"),
    country("CH", "Switzerland"),
    country("CL", "Chile"),
    country("CN", "China"),
    country("CO", "Colombia"),
    country("CR", "Costa Rica"),
    country("CU", "Cuba"),
    country("CY", "Cyprus"),
    country("CZ", "Czechia"),
    country("DE", "Germany"),
    country("DK", "Denmark"),
    country("DO", "Dominican Republic"),
    country("EC", "Ecuador"),
    country("EE", "Estonia"),
    country("EG", "Egypt"),
    country("ES", "Spain"),
    country("FI", "Finland"),
    country("FO", "Faroe Islands"),
    country("FR", "France"),
    country("GA", "Gabon"),
    country("GB", "United Kingdom"),
    country("GD", "Grenada"),
    country("GE", "Georgia"),
    country("GG", "Guernsey"),
    country("GI", "Gibraltar"),
    country("GL", "Greenland"),
    country("GM", "Gambia"),
    country("GR", "Greece"),
    country("GT", "Guatemala"),
    country("GY", "Guyana"),
    country("HK", "Hong Kong"),
    country("HN", "Honduras"),
    country("HR", "Croatia"),
    country("HT", "Haiti"),
    country("HU", "Hungary"),
    country("ID", "Indonesia"),
    country("IE", "Ireland"),
    country("IM", "Isle of Man"),
    country("IS", "Iceland"),
    country("IT", "Italy"),
    country("JE", "Jersey"),
    country("JM", "Jamaica"),
    country("JP", "Japan"),
    country("KE", "Kenya"),
    country("KR", "South Korea"),
    country("KZ", "Kazakhstan"),
    country("LI", "Liechtenstein"),
    country("LS", "Lesotho"),
    country("LT", "Lithuania"),
    country("LU", "Luxembourg"),
    country("LV", "Latvia"),
    country("MA", "Morocco"),
    country("MC", "Monaco"),
    country("MD", "Moldova"),
    country("ME", "Montenegro"),
    country("MG", "Madagascar"),
    country("MK", "North Macedonia"),
    country("MN", "Mongolia"),
    country("MS", "Montserrat"),
    country("MT", "Malta"),
    country("MX", "Mexico"),
    country("MZ", "Mozambique"),
    country("NA", "Namibia"),
    country("NE", "Niger"),
    country("NG", "Nigeria"),
    country("NI", "Nicaragua"),
    country("NL", "Netherlands"),
    country("NO", "Norway"),
    country("NZ", "New Zealand"),
    country("PA", "Panama"),
    country("PE", "Peru"),
    country("PG", "Papua New Guinea"),
    country("PL", "Poland"),
    country("PR", "Puerto Rico"),
    country("PT", "Portugal"),
    country("PY", "Paraguay"),
    country("RO", "Romania"),
    country("RS", "Serbia"),
    country("RU", "Russia"),
    country("SE", "Sweden"),
    country("SG", "Singapore"),
    country("SI", "Slovenia"),
    country("SJ", "Svalbard and Jan Mayen"),
    country("SK", "Slovakia"),
    country("SM", "San Marino"),
    country("SR", "Suriname"),
    country("SV", "El Salvador"),
    country("TN", "Tunisia"),
    country("TR", "Türkiye"),
    country("UA", "Ukraine"),
    country("US", "United States"),
    country("UY", "Uruguay"),
    country("VA", "Vatican City"),
    country("VE", "Venezuela"),
    country("VN", "Vietnam"),
    country("ZA", "South Africa"),
    country("ZW", "Zimbabwe"),
];

/// Looks up a country by code, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`ClientError::UnknownCountry`] if the code is not in [`COUNTRIES`].
pub fn find_country(code: &str) -> Result<&'static Country, ClientError> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| ClientError::UnknownCountry {
            code: code.to_string(),
        })
}

/// Returns countries whose code or name contains `needle`, ignoring case.
///
/// An empty needle matches every country.
pub fn search_countries(needle: &str) -> Vec<&'static Country> {
    let needle = needle.trim().to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| {
            c.code.to_lowercase().contains(&needle) || c.name.to_lowercase().contains(&needle)
        })
        .collect()
}

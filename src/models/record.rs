//! GNS country-file record types.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GnsError, GnsResult};

/// Number of tab-separated columns in a GNS country-file line.
pub const COLUMN_COUNT: usize = 25;

/// Column positions in a GNS country-file line.
pub mod column {
    pub const UFI: usize = 0;
    pub const UNI: usize = 1;
    pub const LAT: usize = 2;
    pub const LONG: usize = 3;
    pub const FC: usize = 8;
    pub const DSG: usize = 9;
    pub const PC: usize = 10;
    pub const CC1: usize = 11;
    pub const ADM1: usize = 12;
    pub const ADM2: usize = 13;
    pub const POP: usize = 14;
    pub const ELEV: usize = 15;
    pub const NT: usize = 17;
    pub const FULL_NAME: usize = 22;
}

/// Broad feature classification (the FC column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// Administrative region (A)
    Administrative,
    /// Populated place (P)
    PopulatedPlace,
    /// Vegetation (V)
    Vegetation,
    /// Locality or area (L)
    Locality,
    /// Undersea (U)
    Undersea,
    /// Streets, highways, roads, or railroad (R)
    Route,
    /// Hypsographic (T)
    Hypsographic,
    /// Hydrographic (H)
    Hydrographic,
    /// Spot feature (S)
    Spot,
}

impl FeatureClass {
    /// Parse the single-letter class code, case-insensitively.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(FeatureClass::Administrative),
            "P" => Some(FeatureClass::PopulatedPlace),
            "V" => Some(FeatureClass::Vegetation),
            "L" => Some(FeatureClass::Locality),
            "U" => Some(FeatureClass::Undersea),
            "R" => Some(FeatureClass::Route),
            "T" => Some(FeatureClass::Hypsographic),
            "H" => Some(FeatureClass::Hydrographic),
            "S" => Some(FeatureClass::Spot),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            FeatureClass::Administrative => 'A',
            FeatureClass::PopulatedPlace => 'P',
            FeatureClass::Vegetation => 'V',
            FeatureClass::Locality => 'L',
            FeatureClass::Undersea => 'U',
            FeatureClass::Route => 'R',
            FeatureClass::Hypsographic => 'T',
            FeatureClass::Hydrographic => 'H',
            FeatureClass::Spot => 'S',
        }
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Raw name-type code such as `N`, `V`, `NS` or `VS`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameType(String);

impl NameType {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_string())
    }

    /// Variant names are never admitted into either pass.
    pub fn is_variant(&self) -> bool {
        self.0.chars().any(|c| c.eq_ignore_ascii_case(&'v'))
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a GNS country file.
#[derive(Debug, Clone, PartialEq)]
pub struct GnsRecord {
    /// Unique feature identifier
    pub ufi: String,
    /// Unique name identifier
    pub uni: String,
    pub lat: f64,
    pub lon: f64,
    pub feature_class: FeatureClass,
    /// Feature designation code, e.g. `PPL`
    pub designation: String,
    /// Populated place classification (1 = largest)
    pub populated_place_class: Option<String>,
    /// Primary country code
    pub country_code: String,
    pub adm1: Option<String>,
    /// Reserved; no rule reads it.
    pub adm2: Option<String>,
    pub population: Option<u64>,
    /// Elevation in meters
    pub elevation: Option<i32>,
    pub name_type: NameType,
    pub full_name: String,
}

impl GnsRecord {
    /// Build a record from already-split columns.
    ///
    /// Missing trailing columns are treated as empty and extra columns are
    /// ignored. An unreadable POP or ELEV is treated as absent; only the
    /// coordinates and the feature class can reject a line.
    pub fn from_fields<'a, I>(fields: I) -> GnsResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cols: Vec<&str> = fields.into_iter().take(COLUMN_COUNT).collect();
        cols.resize(COLUMN_COUNT, "");

        let feature_class = FeatureClass::from_letter(cols[column::FC])
            .ok_or_else(|| GnsError::UnknownFeatureClass(cols[column::FC].to_string()))?;

        Ok(Self {
            ufi: cols[column::UFI].trim().to_string(),
            uni: cols[column::UNI].trim().to_string(),
            lat: parse_required(cols[column::LAT], "LAT")?,
            lon: parse_required(cols[column::LONG], "LONG")?,
            feature_class,
            designation: cols[column::DSG].trim().to_string(),
            populated_place_class: non_empty(cols[column::PC]),
            country_code: cols[column::CC1].trim().to_string(),
            adm1: non_empty(cols[column::ADM1]),
            adm2: non_empty(cols[column::ADM2]),
            population: parse_optional(cols[column::POP], "POP"),
            elevation: parse_optional(cols[column::ELEV], "ELEV"),
            name_type: NameType::new(cols[column::NT]),
            full_name: cols[column::FULL_NAME].trim().to_string(),
        })
    }

    pub fn is_variant(&self) -> bool {
        self.name_type.is_variant()
    }
}

impl FromStr for GnsRecord {
    type Err = GnsError;

    fn from_str(line: &str) -> GnsResult<Self> {
        Self::from_fields(line.trim_end_matches(&['\r', '\n'][..]).split('\t'))
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_required<T: FromStr>(value: &str, field: &'static str) -> GnsResult<T> {
    value.trim().parse().map_err(|_| GnsError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_optional<T: FromStr>(value: &str, field: &'static str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("Ignoring unreadable {} value {:?}", field, value);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a tab-separated line with the given columns set.
    pub(crate) fn line(cols: &[(usize, &str)]) -> String {
        let mut fields = vec![""; COLUMN_COUNT];
        for (idx, value) in cols {
            fields[*idx] = *value;
        }
        fields.join("\t")
    }

    #[test]
    fn test_parse_full_line() {
        let raw = line(&[
            (column::UFI, "-2437040"),
            (column::UNI, "-3770522"),
            (column::LAT, "9.65"),
            (column::LONG, "123.85"),
            (column::FC, "P"),
            (column::DSG, "PPL"),
            (column::PC, "3"),
            (column::CC1, "RP"),
            (column::ADM1, "07"),
            (column::POP, "92297"),
            (column::ELEV, "12"),
            (column::NT, "N"),
            (column::FULL_NAME, "Tagbilaran"),
        ]);

        let record: GnsRecord = raw.parse().unwrap();
        assert_eq!(record.uni, "-3770522");
        assert_eq!(record.feature_class, FeatureClass::PopulatedPlace);
        assert_eq!(record.designation, "PPL");
        assert_eq!(record.adm1.as_deref(), Some("07"));
        assert_eq!(record.adm2, None);
        assert_eq!(record.population, Some(92297));
        assert_eq!(record.elevation, Some(12));
        assert_eq!(record.populated_place_class.as_deref(), Some("3"));
        assert_eq!(record.full_name, "Tagbilaran");
        assert!((record.lat - 9.65).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_line_defaults_trailing_fields() {
        let record: GnsRecord = "1\t2\t10.5\t120.25\t\t\t\t\tT\tMT".parse().unwrap();
        assert_eq!(record.designation, "MT");
        assert_eq!(record.full_name, "");
        assert_eq!(record.population, None);
        assert_eq!(record.elevation, None);
        assert_eq!(record.adm1, None);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let raw = format!("{}\r\n", line(&[(column::LAT, "1"), (column::LONG, "2"), (column::FC, "H"), (column::FULL_NAME, "Bay")]));
        let record: GnsRecord = raw.parse().unwrap();
        assert_eq!(record.full_name, "Bay");
    }

    #[test]
    fn test_bad_coordinate_is_parse_failure() {
        let raw = line(&[(column::LAT, "LAT"), (column::LONG, "2"), (column::FC, "P")]);
        let err = raw.parse::<GnsRecord>().unwrap_err();
        assert!(matches!(err, GnsError::InvalidNumber { field: "LAT", .. }));
    }

    #[test]
    fn test_unknown_feature_class() {
        let raw = line(&[(column::LAT, "1"), (column::LONG, "2"), (column::FC, "X")]);
        assert_eq!(
            raw.parse::<GnsRecord>().unwrap_err(),
            GnsError::UnknownFeatureClass("X".into())
        );
    }

    #[test]
    fn test_negative_elevation() {
        let raw = line(&[(column::LAT, "1"), (column::LONG, "2"), (column::FC, "U"), (column::ELEV, "-4200")]);
        let record: GnsRecord = raw.parse().unwrap();
        assert_eq!(record.elevation, Some(-4200));
    }

    #[test]
    fn test_unreadable_optional_numbers_are_absent() {
        let raw = line(&[
            (column::LAT, "1"),
            (column::LONG, "2"),
            (column::FC, "A"),
            (column::DSG, "ADM1"),
            (column::POP, "about 5000"),
            (column::ELEV, "12.5"),
            (column::FULL_NAME, "Province of Bohol"),
        ]);
        let record: GnsRecord = raw.parse().unwrap();
        assert_eq!(record.population, None);
        assert_eq!(record.elevation, None);
        assert_eq!(record.designation, "ADM1");
        assert_eq!(record.full_name, "Province of Bohol");
    }

    #[test]
    fn test_name_type_variants() {
        assert!(NameType::new("V").is_variant());
        assert!(NameType::new("vs").is_variant());
        assert!(!NameType::new("N").is_variant());
        assert!(!NameType::new("NS").is_variant());
        assert_eq!(NameType::new(" NS ").to_string(), "NS");
    }
}

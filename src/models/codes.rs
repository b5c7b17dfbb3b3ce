//! Closed code enumerations for coded columns
//!
//! Each enumeration has a matching static [`ChoiceSet`] so the dictionary
//! can describe the legal values without naming the Rust type. Parsing a
//! code outside the set fails with [`UnknownCode`].

use crate::schema::choices::{Choice, ChoiceSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A value was not one of the codes declared for its column
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{code}' is not a valid {choice_set} code")]
pub struct UnknownCode {
    pub choice_set: &'static str,
    pub code: String,
}

/// Declares a text-coded enumeration together with its choice table.
macro_rules! text_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $set:ident = $set_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn choices() -> &'static ChoiceSet {
                &$set
            }
        }

        pub static $set: ChoiceSet = ChoiceSet {
            name: $set_name,
            entries: &[$(Choice { code: $code, label: $label }),+],
        };

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s).ok_or_else(|| UnknownCode {
                    choice_set: $set_name,
                    code: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// =============================================================================
// Filing type (integer coded)
// =============================================================================

/// How a filing reached the system, coded as an integer in `FILING_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilingType {
    /// Header code of the lookup group
    FilingType,
    Electronic,
    KeyDataEntry,
    HistoricalLobby,
    HistoricalCampaign,
    Ams,
    CalOnline,
}

pub static FILING_TYPE_CHOICES: ChoiceSet = ChoiceSet {
    name: "FILING_TYPE",
    entries: &[
        Choice { code: "22000", label: "Filing type" },
        Choice { code: "22001", label: "Electronic" },
        Choice { code: "22002", label: "Key data entry" },
        Choice { code: "22003", label: "Historical lobby" },
        Choice { code: "22004", label: "Historical campaign" },
        Choice { code: "22005", label: "AMS" },
        Choice { code: "22006", label: "Cal Online" },
    ],
};

impl FilingType {
    pub const ALL: &'static [FilingType] = &[
        FilingType::FilingType,
        FilingType::Electronic,
        FilingType::KeyDataEntry,
        FilingType::HistoricalLobby,
        FilingType::HistoricalCampaign,
        FilingType::Ams,
        FilingType::CalOnline,
    ];

    pub const fn code(self) -> i32 {
        match self {
            FilingType::FilingType => 22000,
            FilingType::Electronic => 22001,
            FilingType::KeyDataEntry => 22002,
            FilingType::HistoricalLobby => 22003,
            FilingType::HistoricalCampaign => 22004,
            FilingType::Ams => 22005,
            FilingType::CalOnline => 22006,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        // Entries are declared in the same order as ALL
        FILING_TYPE_CHOICES.entries[self as usize].label
    }

    pub fn choices() -> &'static ChoiceSet {
        &FILING_TYPE_CHOICES
    }
}

impl fmt::Display for FilingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FilingType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| UnknownCode {
                choice_set: "FILING_TYPE",
                code: s.to_string(),
            })
    }
}

impl TryFrom<i32> for FilingType {
    type Error = UnknownCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| UnknownCode {
            choice_set: "FILING_TYPE",
            code: code.to_string(),
        })
    }
}

impl Serialize for FilingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for FilingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        FilingType::try_from(code).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Text coded columns
// =============================================================================

text_codes! {
    /// Record type of summary rows
    pub enum SummaryRecordType in SMRY_REC_TYPE_CHOICES = "SMRY_REC_TYPE" {
        Summary => ("SMRY", "Summary"),
    }
}

text_codes! {
    /// Source form or schedule of a summary total
    pub enum FormType in SMRY_FORM_TYPE_CHOICES = "SMRY_FORM_TYPE" {
        F401A => ("401A", "Form 401 (Slate mailer organization campaign statement): Schedule A, payments received"),
        F401B => ("401B", "Form 401 (Slate mailer organization campaign statement): Schedule B, payments made"),
        ScheduleA => ("A", "Form 460 (Recipient committee campaign statement): Schedule A, monetary contributions received"),
        ScheduleB1 => ("B1", "Form 460 (Recipient committee campaign statement): Schedule B, Part 1, loans received"),
        ScheduleC => ("C", "Form 460 (Recipient committee campaign statement): Schedule C, non-monetary contributions received"),
        ScheduleD => ("D", "Form 460 (Recipient committee campaign statement): Schedule D, summary of expenditures supporting or opposing other candidates, measures and committees"),
        ScheduleE => ("E", "Form 460 (Recipient committee campaign statement): Schedule E, payments made"),
        ScheduleF => ("F", "Form 460 (Recipient committee campaign statement): Schedule F, accrued expenses (unpaid bills)"),
        F401 => ("F401", "Form 401 (Slate mailer organization campaign statement)"),
        F450 => ("F450", "Form 450 (Recipient committee campaign statement, short form)"),
        F460 => ("F460", "Form 460 (Recipient committee campaign statement)"),
        F461 => ("F461", "Form 461 (Independent expenditure and major donor committee campaign statement)"),
        F465 => ("F465", "Form 465 (Supplemental independent expenditure report)"),
        F625 => ("F625", "Form 625 (Report of lobbying firm)"),
        F625P2 => ("F625P2", "Form 625 (Report of lobbying firm): Part 2, payments received in connection with lobbying activity"),
        F625P3A => ("F625P3A", "Form 625 (Report of lobbying firm): Part 3A, payments for activity expenses made in connection with lobbying activities"),
        F625P3B => ("F625P3B", "Form 625 (Report of lobbying firm): Part 3B, payments to other lobbying firms made in connection with lobbying activities"),
        F635 => ("F635", "Form 635 (Report of lobbyist employer and lobbying coalition)"),
        F635P3A => ("F635P3A", "Form 635 (Report of lobbyist employer and lobbying coalition): Part 3A, payments in in-house employee lobbyists"),
        F635P3B => ("F635P3B", "Form 635 (Report of lobbyist employer and lobbying coalition): Part 3B, payments to lobbying firms"),
        F635P3C => ("F635P3C", "Form 635 (Report of lobbyist employer and lobbying coalition): Part 3C, activity expenses"),
        F635P3D => ("F635P3D", "Form 635 (Report of lobbyist employer and lobbying coalition): Part 3D, other payments to influence legislative or administrative action"),
        F635P3E => ("F635P3E", "Form 635 (Report of lobbyist employer and lobbying coalition): Part 3E, payments in connection with administrative testimony in ratemaking proceedings before the California Public Utilities Commission"),
        F645 => ("F645", "Form 645 (Report of person spending $5,000 or more to influence legislative or administrative action)"),
        F645P2A => ("F645P2A", "Form 645 (Report of person spending $5,000 or more to influence legislative or administrative action): Part 2A, activity expenses"),
        F645P2B => ("F645P2B", "Form 645 (Report of person spending $5,000 or more to influence legislative or administrative action): Part 2B, other payments to influence legislative or administrative action"),
        F645P2C => ("F645P2C", "Form 645 (Report of person spending $5,000 or more to influence legislative or administrative action): Part 2C, payments in connection with administrative testimony in ratemaking proceedings before the California Public Utilities Commission"),
        F900 => ("F900", "Form 900 (Public employee's retirement board candidate campaign statement)"),
        ScheduleG => ("G", "Form 460 (Recipient committee campaign statement): Schedule G, payments made by an agent or independent contractor"),
        ScheduleH => ("H", "Form 460 (Recipient committee campaign statement): Schedule H, loans made to others"),
        ScheduleH1 => ("H1", "Form 460 (Recipient committee campaign statement): Schedule H, Part 1"),
        ScheduleH2 => ("H2", "Form 460 (Recipient committee campaign statement): Schedule H, Part 2"),
        ScheduleH3 => ("H3", "Form 460 (Recipient committee campaign statement): Schedule H, Part 3"),
        ScheduleI => ("I", "Form 460 (Recipient committee campaign statement): Schedule I, miscellaneous increases to cash"),
        S640 => ("S640", "Form 640 (Governmental agencies reporting of other payments to influence legislative or administrative action) attachment"),
    }
}

text_codes! {
    /// Entity classification of a filer or payee, per the CAL format
    pub enum EntityCode in ENTITY_CODE_CHOICES = "ENTITY_CD" {
        Unknown => ("", "Unknown"),
        CandidateOfficeholder => ("CAO", "Candidate/officeholder"),
        Committee => ("COM", "Committee"),
        Individual => ("IND", "Individual"),
        Other => ("OTH", "Other"),
        PoliticalParty => ("PTY", "Political party"),
        RecipientCommittee => ("RCP", "Recipient committee"),
        SmallContributorCommittee => ("SCC", "Small contributor committee"),
    }
}

impl Default for EntityCode {
    fn default() -> Self {
        EntityCode::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_round_trips_through_code() {
        for form in FormType::ALL {
            assert_eq!(FormType::from_code(form.code()), Some(*form));
        }
        assert_eq!(FormType::ALL.len(), SMRY_FORM_TYPE_CHOICES.len());
    }

    #[test]
    fn test_unknown_form_type_is_rejected() {
        let err = "ZZZZ".parse::<FormType>().unwrap_err();
        assert_eq!(err.choice_set, "SMRY_FORM_TYPE");
        assert_eq!(err.code, "ZZZZ");
        assert_eq!(err.to_string(), "'ZZZZ' is not a valid SMRY_FORM_TYPE code");
    }

    #[test]
    fn test_filing_type_label_matches_choice_table() {
        for filing_type in FilingType::ALL {
            let code = filing_type.code().to_string();
            assert_eq!(FILING_TYPE_CHOICES.label(&code), Some(filing_type.label()));
        }
        assert_eq!(FilingType::from_code(22001), Some(FilingType::Electronic));
        assert_eq!(FilingType::from_code(21999), None);
        assert_eq!("22006".parse::<FilingType>().unwrap(), FilingType::CalOnline);
    }

    #[test]
    fn test_entity_code_blank_is_unknown() {
        assert_eq!("".parse::<EntityCode>().unwrap(), EntityCode::Unknown);
        assert_eq!(EntityCode::default().label(), "Unknown");
    }

    #[test]
    fn test_codes_serialize_as_source_values() {
        assert_eq!(serde_json::to_string(&FormType::F460).unwrap(), "\"F460\"");
        assert_eq!(serde_json::to_string(&FilingType::Electronic).unwrap(), "22001");
        assert!(serde_json::from_str::<FormType>("\"ZZZZ\"").is_err());
        assert!(serde_json::from_str::<FilingType>("1").is_err());
    }
}

//! Categorical values of a reimbursement request.
//!
//! Each kind is stored and serialized by its exact label, which is also what
//! filters and search see. Command-line parsing is looser: it accepts the
//! label or the variant name, ignoring case, so `--category food`,
//! `--category Food` and `--category "materials & supplies"` all work.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tabview::RecordLabel;
use thiserror::Error;

/// A string that names no variant of a kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{input}'")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub input: String,
}

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn variant_name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.label().eq_ignore_ascii_case(wanted)
                            || v.variant_name().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| ParseKindError {
                        kind: $kind,
                        input: s.to_string(),
                    })
            }
        }

        impl RecordLabel for $name {
            fn record_label(&self) -> &str {
                self.label()
            }
        }
    };
}

label_enum! {
    /// Who filed the request.
    SubmitterType ("submitter type") {
        User => "USER",
        Organizer => "ORGANIZER",
    }
}

label_enum! {
    /// Review state of a request.
    Status ("status") {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

label_enum! {
    /// Expense category.
    Category ("category") {
        TelephoneRental => "Telephone Rental",
        Postage => "Postage",
        OfficeSupplies => "Office Supplies",
        Copies => "Copies",
        EquipmentRental => "Equipment Rental",
        EquipmentPurchase => "Equipment Purchase",
        EquipmentMaintenance => "Equipment Maintenance",
        ProfessionalServices => "Professional Services",
        InsurancePremiums => "Insurance Premiums",
        Advertising => "Advertising",
        DuesMembership => "Dues/Membership",
        AwardsGifts => "Awards/Gifts",
        Photography => "Photography",
        ClothingUniform => "Clothing/Uniform",
        RegistrationTournamentFee => "Registration/Tournament Fee",
        Instructor => "Instructor",
        RefereesJudges => "Referees/Judges",
        Fine => "Fine",
        WebHosting => "Web Hosting",
        BooksSubscription => "Books/Subscription",
        Printing => "Printing",
        Fundraising => "Fundraising",
        Donation => "Donation",
        CdAndDvd => "CD and DVD",
        Rush => "Rush",
        Social => "Social",
        FacilityRentalSocial => "Facility Rental - Social",
        Food => "Food",
        MaterialsSupplies => "Materials & Supplies",
        Meeting => "Meeting",
        EquipmentMaintenanceRepairs => "Equipment Maintenance/Repairs",
        Prizes => "Prizes",
        Security => "Security",
        EmtService => "EMT Service",
        Catering => "Catering",
        Meal => "Meal",
        Banquet => "Banquet",
        Retreat => "Retreat",
        FestivalFairExpense => "Festival/Fair Expense",
        SpecialFunction => "Special Function",
        CollegianAd => "Collegian Ad",
        Banner => "Banner",
        HonorariaSpeaker => "Honoraria - Speaker",
        HonorariaDj => "Honoraria - DJ",
        HonorariaPerformingArtist => "Honoraria - Performing Artist",
        SpeakerArtistTransportation => "Speaker/Artist - Transportation",
        SpeakerArtistLodging => "Speaker/Artist - Lodging",
        SpeakerArtistMeal => "Speaker/Artist - Meal",
        SpeakerArtistParking => "Speaker/Artist - Parking",
        ProgramFacilityRental => "Program - Facility Rental",
        ProgramEquipmentRental => "Program - Equipment Rental",
        ProgramPurchase => "Program - Purchase",
        ProgramSoundSystemRental => "Program - Sound System Rental",
        ProgramMovieRental => "Program - Movie Rental",
        ProgramProjectionist => "Program - Projectionist",
        ProgramProfessionalServices => "Program - Professional Services",
        ProgramPublicity => "Program - Publicity",
        ProgramCopiesFlyersPosters => "Program - Copies/Flyers/Posters",
        ProgramMediaPrintBroadcast => "Program - Media Print/Broadcast",
        ProgramCostume => "Program - Costume",
        ProgramSetConstruction => "Program - Set Construction",
        ProgramProps => "Program - Props",
        ProgramCopyrightLicensing => "Program - Copyright/Licensing",
        GeneralOperations50 => "General Operations ($50)",
        TravelTransportation => "Travel - Transportation",
        TravelLodging => "Travel - Lodging",
        TravelRegistration => "Travel - Registration",
        TravelMeal => "Travel - Meal",
        TravelConference => "Travel - Conference",
        Refund => "Refund",
    }
}

impl SubmitterType {
    /// Display form, e.g. `Organizer`.
    pub fn nice_label(self) -> String {
        capitalize(self.label())
    }
}

impl Status {
    /// Display form, e.g. `Approved`.
    pub fn nice_label(self) -> String {
        capitalize(self.label())
    }
}

/// First letter upper case, the rest lower case.
fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

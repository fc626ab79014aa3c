//! Typed, validated requests produced by the dispatcher.
//!
//! A [`TypedRequest`] only exists after every extracted field has passed its
//! validator; each variant knows the upstream path it maps onto. Sub-resource
//! enums double as the per-collection whitelists: a trailing segment that
//! does not parse into one of them is treated as "no pattern matched".

use chrono::NaiveDate;
use serde::Serialize;

use crate::validation::{AmendmentType, BillType, Chamber, LawType, ReportType};

/// Bill sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillSubResource {
    Actions,
    Amendments,
    Committees,
    Cosponsors,
    RelatedBills,
    Subjects,
    Summaries,
    Text,
    Titles,
}

impl BillSubResource {
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "actions" => Some(Self::Actions),
            "amendments" => Some(Self::Amendments),
            "committees" => Some(Self::Committees),
            "cosponsors" => Some(Self::Cosponsors),
            "relatedbills" => Some(Self::RelatedBills),
            "subjects" => Some(Self::Subjects),
            "summaries" => Some(Self::Summaries),
            "text" => Some(Self::Text),
            "titles" => Some(Self::Titles),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Amendments => "amendments",
            Self::Committees => "committees",
            Self::Cosponsors => "cosponsors",
            Self::RelatedBills => "relatedbills",
            Self::Subjects => "subjects",
            Self::Summaries => "summaries",
            Self::Text => "text",
            Self::Titles => "titles",
        }
    }
}

/// Amendment sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmendmentSubResource {
    Actions,
    Amendments,
    Cosponsors,
    Text,
}

impl AmendmentSubResource {
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "actions" => Some(Self::Actions),
            "amendments" => Some(Self::Amendments),
            "cosponsors" => Some(Self::Cosponsors),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Amendments => "amendments",
            Self::Cosponsors => "cosponsors",
            Self::Text => "text",
        }
    }
}

/// Member sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberSubResource {
    SponsoredLegislation,
    CosponsoredLegislation,
}

impl MemberSubResource {
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "sponsored-legislation" => Some(Self::SponsoredLegislation),
            "cosponsored-legislation" => Some(Self::CosponsoredLegislation),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SponsoredLegislation => "sponsored-legislation",
            Self::CosponsoredLegislation => "cosponsored-legislation",
        }
    }
}

/// Committee sub-resources. The communication views are chamber-specific;
/// the dispatcher enforces that rule after the whitelist match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitteeSubResource {
    Bills,
    Reports,
    Nominations,
    HouseCommunication,
    SenateCommunication,
}

impl CommitteeSubResource {
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "bills" => Some(Self::Bills),
            "reports" => Some(Self::Reports),
            "nominations" => Some(Self::Nominations),
            "house-communication" => Some(Self::HouseCommunication),
            "senate-communication" => Some(Self::SenateCommunication),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bills => "bills",
            Self::Reports => "reports",
            Self::Nominations => "nominations",
            Self::HouseCommunication => "house-communication",
            Self::SenateCommunication => "senate-communication",
        }
    }
}

/// Nomination sub-resources. `Nominee` carries the position ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NominationSubResource {
    Actions,
    Committees,
    Hearings,
    Nominee(u32),
}

/// Treaty sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatySubResource {
    Actions,
    Committees,
}

impl TreatySubResource {
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "actions" => Some(Self::Actions),
            "committees" => Some(Self::Committees),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Committees => "committees",
        }
    }
}

/// A fully validated request, one variant per collection pattern family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "collection", rename_all = "kebab-case")]
pub enum TypedRequest {
    Bill {
        congress: u16,
        bill_type: BillType,
        number: u32,
        sub: Option<BillSubResource>,
    },
    Amendment {
        congress: u16,
        amendment_type: AmendmentType,
        number: u32,
        sub: Option<AmendmentSubResource>,
    },
    Law {
        congress: u16,
        law_type: Option<LawType>,
        number: Option<u32>,
    },
    Member {
        bioguide_id: String,
        sub: Option<MemberSubResource>,
    },
    MemberByCongress {
        congress: u16,
    },
    MemberByState {
        state: String,
    },
    MemberByStateDistrict {
        state: String,
        district: u16,
    },
    MemberByCongressStateDistrict {
        congress: u16,
        state: String,
        district: u16,
    },
    Committee {
        chamber: Chamber,
        code: String,
        sub: Option<CommitteeSubResource>,
    },
    CommitteeReport {
        congress: u16,
        report_type: ReportType,
        number: u32,
        text: bool,
    },
    CommitteePrint {
        congress: u16,
        chamber: Chamber,
        jacket_number: u32,
        text: bool,
    },
    CommitteeMeeting {
        congress: u16,
        chamber: Chamber,
        event_id: u32,
    },
    Hearing {
        congress: u16,
        chamber: Chamber,
        jacket_number: u32,
    },
    CongressionalRecord,
    DailyCongressionalRecord {
        volume: u32,
        issue: u32,
        articles: bool,
    },
    BoundCongressionalRecord {
        date: NaiveDate,
    },
    HouseCommunication {
        congress: u16,
        communication_type: String,
        number: u32,
    },
    SenateCommunication {
        congress: u16,
        communication_type: String,
        number: u32,
    },
    HouseRequirement {
        number: u32,
        matching_communications: bool,
    },
    HouseVote {
        congress: u16,
        session: u32,
        number: u32,
        members: bool,
    },
    Nomination {
        congress: u16,
        number: u32,
        sub: Option<NominationSubResource>,
    },
    Treaty {
        congress: u16,
        number: u32,
        sub: Option<TreatySubResource>,
    },
    CrsReport {
        number: String,
    },
    Summaries {
        congress: u16,
        bill_type: Option<BillType>,
    },
    Congress {
        number: u16,
    },
    CurrentCongress,
}

impl TypedRequest {
    /// Upstream path for this request, relative to the API base.
    ///
    /// Note the member list shapes: the identifier grammar spells them
    /// `member/state/{code}/district/{d}`, but the upstream drops the
    /// `state`/`district` literals outside the congress-scoped form.
    #[must_use]
    pub fn upstream_path(&self) -> String {
        match self {
            Self::Bill {
                congress,
                bill_type,
                number,
                sub,
            } => join(
                format!("/bill/{congress}/{}/{number}", bill_type.as_str()),
                sub.map(BillSubResource::as_str),
            ),
            Self::Amendment {
                congress,
                amendment_type,
                number,
                sub,
            } => join(
                format!("/amendment/{congress}/{}/{number}", amendment_type.as_str()),
                sub.map(AmendmentSubResource::as_str),
            ),
            Self::Law {
                congress,
                law_type,
                number,
            } => {
                let mut path = format!("/law/{congress}");
                if let Some(law_type) = law_type {
                    path.push('/');
                    path.push_str(law_type.as_str());
                    if let Some(number) = number {
                        path.push_str(&format!("/{number}"));
                    }
                }
                path
            }
            Self::Member { bioguide_id, sub } => join(
                format!("/member/{bioguide_id}"),
                sub.map(MemberSubResource::as_str),
            ),
            Self::MemberByCongress { congress } => format!("/member/congress/{congress}"),
            Self::MemberByState { state } => format!("/member/{state}"),
            Self::MemberByStateDistrict { state, district } => {
                format!("/member/{state}/{district}")
            }
            Self::MemberByCongressStateDistrict {
                congress,
                state,
                district,
            } => format!("/member/congress/{congress}/{state}/{district}"),
            Self::Committee { chamber, code, sub } => join(
                format!("/committee/{}/{code}", chamber.as_str()),
                sub.map(CommitteeSubResource::as_str),
            ),
            Self::CommitteeReport {
                congress,
                report_type,
                number,
                text,
            } => join(
                format!(
                    "/committee-report/{congress}/{}/{number}",
                    report_type.as_str()
                ),
                text.then_some("text"),
            ),
            Self::CommitteePrint {
                congress,
                chamber,
                jacket_number,
                text,
            } => join(
                format!(
                    "/committee-print/{congress}/{}/{jacket_number}",
                    chamber.as_str()
                ),
                text.then_some("text"),
            ),
            Self::CommitteeMeeting {
                congress,
                chamber,
                event_id,
            } => format!(
                "/committee-meeting/{congress}/{}/{event_id}",
                chamber.as_str()
            ),
            Self::Hearing {
                congress,
                chamber,
                jacket_number,
            } => format!("/hearing/{congress}/{}/{jacket_number}", chamber.as_str()),
            Self::CongressionalRecord => "/congressional-record".to_string(),
            Self::DailyCongressionalRecord {
                volume,
                issue,
                articles,
            } => join(
                format!("/daily-congressional-record/{volume}/{issue}"),
                articles.then_some("articles"),
            ),
            Self::BoundCongressionalRecord { date } => {
                format!("/bound-congressional-record/{}", date.format("%Y/%m/%d"))
            }
            Self::HouseCommunication {
                congress,
                communication_type,
                number,
            } => format!("/house-communication/{congress}/{communication_type}/{number}"),
            Self::SenateCommunication {
                congress,
                communication_type,
                number,
            } => format!("/senate-communication/{congress}/{communication_type}/{number}"),
            Self::HouseRequirement {
                number,
                matching_communications,
            } => join(
                format!("/house-requirement/{number}"),
                matching_communications.then_some("matching-communications"),
            ),
            Self::HouseVote {
                congress,
                session,
                number,
                members,
            } => join(
                format!("/house-vote/{congress}/{session}/{number}"),
                members.then_some("members"),
            ),
            Self::Nomination {
                congress,
                number,
                sub,
            } => {
                let base = format!("/nomination/{congress}/{number}");
                match sub {
                    None => base,
                    Some(NominationSubResource::Actions) => format!("{base}/actions"),
                    Some(NominationSubResource::Committees) => format!("{base}/committees"),
                    Some(NominationSubResource::Hearings) => format!("{base}/hearings"),
                    Some(NominationSubResource::Nominee(ordinal)) => {
                        format!("{base}/{ordinal}")
                    }
                }
            }
            Self::Treaty {
                congress,
                number,
                sub,
            } => join(
                format!("/treaty/{congress}/{number}"),
                sub.map(TreatySubResource::as_str),
            ),
            Self::CrsReport { number } => format!("/crsreport/{number}"),
            Self::Summaries {
                congress,
                bill_type,
            } => join(
                format!("/summaries/{congress}"),
                bill_type.map(BillType::as_str),
            ),
            Self::Congress { number } => format!("/congress/{number}"),
            Self::CurrentCongress => "/congress/current".to_string(),
        }
    }
}

fn join(base: String, tail: Option<&str>) -> String {
    match tail {
        Some(tail) => format!("{base}/{tail}"),
        None => base,
    }
}

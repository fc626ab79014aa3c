//! Ordered pattern table mapping identifier parts onto typed requests.
//!
//! Each collection owns one resolver; the resolver matches the remaining
//! path segments against that collection's explicit patterns, most specific
//! first, and the first matching pattern wins. Trailing sub-resource
//! segments are matched against the collection's whitelist — an unrecognized
//! trailing segment means "no pattern matched", never "matched with an
//! unknown sub-resource".
//!
//! Shape failures (wrong arity, non-digits where a number belongs, unknown
//! sub-resource) are `InvalidIdentifier`; a matched shape whose field value
//! fails its validator is `InvalidParameter`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::GatewayError;
use crate::identifier::request::{
    AmendmentSubResource, BillSubResource, CommitteeSubResource, MemberSubResource,
    NominationSubResource, TreatySubResource, TypedRequest,
};
use crate::identifier::IdentifierParts;
use crate::validation::{self, Chamber};

/// A typed request plus the caller's query passthrough, ready for the
/// executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    pub request: TypedRequest,
    /// Query parameters forwarded to the upstream verbatim.
    pub params: BTreeMap<String, String>,
}

type CollectionResolver = fn(&[&str]) -> Result<TypedRequest, GatewayError>;

/// The dispatch table. Collection tags are unique, so table order only
/// matters for documentation; within a collection, pattern order is the
/// match-arm order of its resolver.
const COLLECTIONS: &[(&str, CollectionResolver)] = &[
    ("bill", bill),
    ("amendment", amendment),
    ("law", law),
    ("member", member),
    ("committee", committee),
    ("committee-report", committee_report),
    ("committee-print", committee_print),
    ("committee-meeting", committee_meeting),
    ("hearing", hearing),
    ("congressional-record", congressional_record),
    ("daily-congressional-record", daily_congressional_record),
    ("bound-congressional-record", bound_congressional_record),
    ("house-communication", house_communication),
    ("senate-communication", senate_communication),
    ("house-requirement", house_requirement),
    ("house-vote", house_vote),
    ("nomination", nomination),
    ("treaty", treaty),
    ("crsreport", crs_report),
    ("summaries", summaries),
    ("congress", congress_collection),
];

/// Resolve an identifier string into a validated request.
///
/// # Errors
/// `InvalidIdentifier` when no pattern matches the string's shape;
/// `InvalidParameter` when a matched field fails validation.
pub fn resolve(identifier: &str) -> Result<ResolvedRequest, GatewayError> {
    let parts = IdentifierParts::parse(identifier)?;
    let resolver = COLLECTIONS
        .iter()
        .find(|(name, _)| *name == parts.collection)
        .map(|(_, resolver)| resolver)
        .ok_or_else(|| {
            GatewayError::InvalidIdentifier(format!(
                "unknown collection '{}'",
                parts.collection
            ))
        })?;

    let segments: Vec<&str> = parts.segments.iter().map(String::as_str).collect();
    let request = resolver(&segments)?;
    Ok(ResolvedRequest {
        request,
        params: parts.query,
    })
}

/// Parse a path segment expected to be a base-10 number.
///
/// Non-digit characters are a shape failure (`InvalidIdentifier`); an
/// all-digit value too large to represent is a value failure
/// (`InvalidParameter`).
fn numeric(segment: &str, field: &str) -> Result<u32, GatewayError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GatewayError::InvalidIdentifier(format!(
            "{field} segment '{segment}' must be numeric"
        )));
    }
    segment.parse().map_err(|_| {
        GatewayError::InvalidParameter(format!("{field} '{segment}' is too large"))
    })
}

fn no_match(collection: &str, segments: &[&str]) -> GatewayError {
    GatewayError::InvalidIdentifier(format!(
        "'{}' does not match any {collection} pattern",
        segments.join("/")
    ))
}

fn unknown_sub(collection: &str, segment: &str) -> GatewayError {
    GatewayError::InvalidIdentifier(format!(
        "'{segment}' is not a recognized {collection} sub-resource"
    ))
}

fn bill(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, sub) = match segments {
        [congress, bill_type, number] => ((congress, bill_type, number), None),
        [congress, bill_type, number, sub] => (
            (congress, bill_type, number),
            Some(BillSubResource::parse(sub).ok_or_else(|| unknown_sub("bill", sub))?),
        ),
        _ => return Err(no_match("bill", segments)),
    };
    let (congress, bill_type, number) = core;
    Ok(TypedRequest::Bill {
        congress: validation::congress(numeric(congress, "congress")?)?,
        bill_type: validation::bill_type(bill_type)?,
        number: numeric(number, "bill number")?,
        sub,
    })
}

fn amendment(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, sub) = match segments {
        [congress, amendment_type, number] => ((congress, amendment_type, number), None),
        [congress, amendment_type, number, sub] => (
            (congress, amendment_type, number),
            Some(AmendmentSubResource::parse(sub).ok_or_else(|| unknown_sub("amendment", sub))?),
        ),
        _ => return Err(no_match("amendment", segments)),
    };
    let (congress, amendment_type, number) = core;
    Ok(TypedRequest::Amendment {
        congress: validation::congress(numeric(congress, "congress")?)?,
        amendment_type: validation::amendment_type(amendment_type)?,
        number: numeric(number, "amendment number")?,
        sub,
    })
}

fn law(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress] => Ok(TypedRequest::Law {
            congress: validation::congress(numeric(congress, "congress")?)?,
            law_type: None,
            number: None,
        }),
        [congress, law_type] => Ok(TypedRequest::Law {
            congress: validation::congress(numeric(congress, "congress")?)?,
            law_type: Some(validation::law_type(law_type)?),
            number: None,
        }),
        [congress, law_type, number] => Ok(TypedRequest::Law {
            congress: validation::congress(numeric(congress, "congress")?)?,
            law_type: Some(validation::law_type(law_type)?),
            number: Some(numeric(number, "law number")?),
        }),
        _ => Err(no_match("law", segments)),
    }
}

fn member(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        ["congress", congress] => Ok(TypedRequest::MemberByCongress {
            congress: validation::congress(numeric(congress, "congress")?)?,
        }),
        ["congress", congress, "state", state, "district", district] => {
            Ok(TypedRequest::MemberByCongressStateDistrict {
                congress: validation::congress(numeric(congress, "congress")?)?,
                state: validation::state_code(state)?,
                district: validation::district(numeric(district, "district")?)?,
            })
        }
        ["state", state] => Ok(TypedRequest::MemberByState {
            state: validation::state_code(state)?,
        }),
        ["state", state, "district", district] => Ok(TypedRequest::MemberByStateDistrict {
            state: validation::state_code(state)?,
            district: validation::district(numeric(district, "district")?)?,
        }),
        [bioguide_id] => Ok(TypedRequest::Member {
            bioguide_id: validation::bioguide_id(bioguide_id)?,
            sub: None,
        }),
        [bioguide_id, sub] => Ok(TypedRequest::Member {
            bioguide_id: validation::bioguide_id(bioguide_id)?,
            sub: Some(MemberSubResource::parse(sub).ok_or_else(|| unknown_sub("member", sub))?),
        }),
        _ => Err(no_match("member", segments)),
    }
}

fn committee(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [chamber, code] => Ok(TypedRequest::Committee {
            chamber: validation::chamber(chamber)?,
            code: validation::committee_code(code)?,
            sub: None,
        }),
        [chamber, code, sub] => {
            // Chamber and code are validated before the sub-resource rule so
            // a bad chamber surfaces as its own error, not a sub mismatch.
            let chamber = validation::chamber(chamber)?;
            let code = validation::committee_code(code)?;
            let sub =
                CommitteeSubResource::parse(sub).ok_or_else(|| unknown_sub("committee", sub))?;
            match (sub, chamber) {
                (CommitteeSubResource::HouseCommunication, Chamber::Senate) => {
                    Err(GatewayError::InvalidParameter(
                        "house-communication is only available for house committees".to_string(),
                    ))
                }
                (CommitteeSubResource::SenateCommunication, Chamber::House) => {
                    Err(GatewayError::InvalidParameter(
                        "senate-communication is only available for senate committees".to_string(),
                    ))
                }
                _ => Ok(TypedRequest::Committee {
                    chamber,
                    code,
                    sub: Some(sub),
                }),
            }
        }
        _ => Err(no_match("committee", segments)),
    }
}

fn committee_report(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, text) = match segments {
        [congress, report_type, number] => ((congress, report_type, number), false),
        [congress, report_type, number, "text"] => ((congress, report_type, number), true),
        [_, _, _, sub] => return Err(unknown_sub("committee-report", sub)),
        _ => return Err(no_match("committee-report", segments)),
    };
    let (congress, report_type, number) = core;
    Ok(TypedRequest::CommitteeReport {
        congress: validation::congress(numeric(congress, "congress")?)?,
        report_type: validation::report_type(report_type)?,
        number: numeric(number, "report number")?,
        text,
    })
}

fn committee_print(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, text) = match segments {
        [congress, chamber, jacket] => ((congress, chamber, jacket), false),
        [congress, chamber, jacket, "text"] => ((congress, chamber, jacket), true),
        [_, _, _, sub] => return Err(unknown_sub("committee-print", sub)),
        _ => return Err(no_match("committee-print", segments)),
    };
    let (congress, chamber, jacket) = core;
    Ok(TypedRequest::CommitteePrint {
        congress: validation::congress(numeric(congress, "congress")?)?,
        chamber: validation::chamber(chamber)?,
        jacket_number: validation::positive(numeric(jacket, "jacket number")?, "jacket number")?,
        text,
    })
}

fn committee_meeting(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress, chamber, event_id] => Ok(TypedRequest::CommitteeMeeting {
            congress: validation::congress(numeric(congress, "congress")?)?,
            chamber: validation::chamber(chamber)?,
            event_id: validation::positive(numeric(event_id, "event id")?, "event id")?,
        }),
        _ => Err(no_match("committee-meeting", segments)),
    }
}

fn hearing(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress, chamber, jacket] => Ok(TypedRequest::Hearing {
            congress: validation::congress(numeric(congress, "congress")?)?,
            chamber: validation::chamber(chamber)?,
            jacket_number: validation::positive(
                numeric(jacket, "jacket number")?,
                "jacket number",
            )?,
        }),
        _ => Err(no_match("hearing", segments)),
    }
}

fn congressional_record(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    // Date filters for this collection arrive as query parameters.
    if segments.is_empty() {
        Ok(TypedRequest::CongressionalRecord)
    } else {
        Err(no_match("congressional-record", segments))
    }
}

fn daily_congressional_record(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, articles) = match segments {
        [volume, issue] => ((volume, issue), false),
        [volume, issue, "articles"] => ((volume, issue), true),
        [_, _, sub] => return Err(unknown_sub("daily-congressional-record", sub)),
        _ => return Err(no_match("daily-congressional-record", segments)),
    };
    let (volume, issue) = core;
    Ok(TypedRequest::DailyCongressionalRecord {
        volume: validation::positive(numeric(volume, "volume")?, "volume")?,
        issue: validation::positive(numeric(issue, "issue")?, "issue")?,
        articles,
    })
}

fn bound_congressional_record(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [year, month, day] => Ok(TypedRequest::BoundCongressionalRecord {
            date: validation::calendar_date(
                numeric(year, "year")?,
                numeric(month, "month")?,
                numeric(day, "day")?,
            )?,
        }),
        _ => Err(no_match("bound-congressional-record", segments)),
    }
}

fn house_communication(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress, communication_type, number] => Ok(TypedRequest::HouseCommunication {
            congress: validation::congress(numeric(congress, "congress")?)?,
            communication_type: validation::house_communication_type(communication_type)?,
            number: numeric(number, "communication number")?,
        }),
        _ => Err(no_match("house-communication", segments)),
    }
}

fn senate_communication(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress, communication_type, number] => Ok(TypedRequest::SenateCommunication {
            congress: validation::congress(numeric(congress, "congress")?)?,
            communication_type: validation::senate_communication_type(communication_type)?,
            number: numeric(number, "communication number")?,
        }),
        _ => Err(no_match("senate-communication", segments)),
    }
}

fn house_requirement(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (number, matching) = match segments {
        [number] => (number, false),
        [number, "matching-communications"] => (number, true),
        [_, sub] => return Err(unknown_sub("house-requirement", sub)),
        _ => return Err(no_match("house-requirement", segments)),
    };
    Ok(TypedRequest::HouseRequirement {
        number: validation::positive(
            numeric(number, "requirement number")?,
            "requirement number",
        )?,
        matching_communications: matching,
    })
}

fn house_vote(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, members) = match segments {
        [congress, session, number] => ((congress, session, number), false),
        [congress, session, number, "members"] => ((congress, session, number), true),
        [_, _, _, sub] => return Err(unknown_sub("house-vote", sub)),
        _ => return Err(no_match("house-vote", segments)),
    };
    let (congress, session, number) = core;
    Ok(TypedRequest::HouseVote {
        congress: validation::congress(numeric(congress, "congress")?)?,
        session: validation::positive(numeric(session, "session")?, "session")?,
        number: validation::positive(numeric(number, "vote number")?, "vote number")?,
        members,
    })
}

fn nomination(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress, number] => Ok(TypedRequest::Nomination {
            congress: validation::congress(numeric(congress, "congress")?)?,
            number: numeric(number, "nomination number")?,
            sub: None,
        }),
        [congress, number, "nominee", ordinal] => Ok(TypedRequest::Nomination {
            congress: validation::congress(numeric(congress, "congress")?)?,
            number: numeric(number, "nomination number")?,
            sub: Some(NominationSubResource::Nominee(validation::positive(
                numeric(ordinal, "nominee ordinal")?,
                "nominee ordinal",
            )?)),
        }),
        [congress, number, sub] => {
            let sub = match *sub {
                "actions" => NominationSubResource::Actions,
                "committees" => NominationSubResource::Committees,
                "hearings" => NominationSubResource::Hearings,
                other => return Err(unknown_sub("nomination", other)),
            };
            Ok(TypedRequest::Nomination {
                congress: validation::congress(numeric(congress, "congress")?)?,
                number: numeric(number, "nomination number")?,
                sub: Some(sub),
            })
        }
        _ => Err(no_match("nomination", segments)),
    }
}

fn treaty(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    let (core, sub) = match segments {
        [congress, number] => ((congress, number), None),
        [congress, number, sub] => (
            (congress, number),
            Some(TreatySubResource::parse(sub).ok_or_else(|| unknown_sub("treaty", sub))?),
        ),
        _ => return Err(no_match("treaty", segments)),
    };
    let (congress, number) = core;
    Ok(TypedRequest::Treaty {
        congress: validation::congress(numeric(congress, "congress")?)?,
        number: numeric(number, "treaty number")?,
        sub,
    })
}

fn crs_report(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [number] => Ok(TypedRequest::CrsReport {
            number: validation::crs_report_number(number)?,
        }),
        _ => Err(no_match("crsreport", segments)),
    }
}

fn summaries(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        [congress] => Ok(TypedRequest::Summaries {
            congress: validation::congress(numeric(congress, "congress")?)?,
            bill_type: None,
        }),
        [congress, bill_type] => Ok(TypedRequest::Summaries {
            congress: validation::congress(numeric(congress, "congress")?)?,
            bill_type: Some(validation::bill_type(bill_type)?),
        }),
        _ => Err(no_match("summaries", segments)),
    }
}

fn congress_collection(segments: &[&str]) -> Result<TypedRequest, GatewayError> {
    match segments {
        ["current"] => Ok(TypedRequest::CurrentCongress),
        [number] => Ok(TypedRequest::Congress {
            number: validation::congress(numeric(number, "congress")?)?,
        }),
        _ => Err(no_match("congress", segments)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validation::BillType;

    fn kind_of(identifier: &str) -> ErrorKind {
        resolve(identifier).unwrap_err().kind()
    }

    #[test]
    fn bill_with_sub_resource_resolves() {
        let resolved = resolve("bill/118/hr/1/actions").unwrap();
        assert_eq!(
            resolved.request,
            TypedRequest::Bill {
                congress: 118,
                bill_type: BillType::Hr,
                number: 1,
                sub: Some(BillSubResource::Actions),
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let identifiers = [
            "congress-gov://bill/118/hr/1/actions",
            "member/congress/118/state/mi/district/10",
            "committee/house/hsag00/bills",
            "nomination/117/2467/nominee/1",
            "law/117/pub/108",
        ];
        for identifier in identifiers {
            assert_eq!(
                resolve(identifier).unwrap(),
                resolve(identifier).unwrap(),
                "{identifier}"
            );
        }
    }

    #[test]
    fn unknown_collection_is_invalid_identifier() {
        assert_eq!(kind_of("statute/118/1"), ErrorKind::InvalidIdentifier);
    }

    #[test]
    fn unknown_sub_resource_is_invalid_identifier_not_a_match() {
        let cases = [
            "bill/118/hr/1/bogus",
            "member/P000197/votes",
            "committee/house/hsag00/minutes",
            "nomination/117/2467/nominee",
            "treaty/117/3/text",
            "daily-congressional-record/169/1/pages",
        ];
        for identifier in cases {
            assert_eq!(
                kind_of(identifier),
                ErrorKind::InvalidIdentifier,
                "{identifier}"
            );
        }
    }

    #[test]
    fn non_digit_numeric_segment_is_invalid_identifier() {
        let cases = ["bill/abc/hr/1", "nomination/117/2x4", "house-vote/118/one/7"];
        for identifier in cases {
            assert_eq!(
                kind_of(identifier),
                ErrorKind::InvalidIdentifier,
                "{identifier}"
            );
        }
    }

    #[test]
    fn out_of_range_values_are_invalid_parameter() {
        let cases = [
            "nomination/50/1",
            "bill/119/hr/1",
            "member/state/XX",
            "member/state/MI/district/54",
            "bound-congressional-record/2023/13/01",
            "house-vote/118/0/7",
        ];
        for identifier in cases {
            assert_eq!(
                kind_of(identifier),
                ErrorKind::InvalidParameter,
                "{identifier}"
            );
        }
    }

    #[test]
    fn member_literal_patterns_win_over_bioguide() {
        // "state" and "congress" are shape keywords, not bioguide ids.
        let resolved = resolve("member/state/mi").unwrap();
        assert_eq!(
            resolved.request,
            TypedRequest::MemberByState { state: "MI".into() }
        );

        let resolved = resolve("member/congress/118").unwrap();
        assert_eq!(
            resolved.request,
            TypedRequest::MemberByCongress { congress: 118 }
        );
    }

    #[test]
    fn committee_communication_sub_must_match_chamber() {
        assert!(resolve("committee/house/hsag00/house-communication").is_ok());
        assert!(resolve("committee/senate/ssfr00/senate-communication").is_ok());

        let err = resolve("committee/senate/ssfr00/house-communication").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.to_string().contains("house-communication"));

        let err = resolve("committee/house/hsag00/senate-communication").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn nomination_congress_error_names_value_and_bounds() {
        let message = resolve("nomination/50/1").unwrap_err().to_string();
        assert!(message.contains("50"), "{message}");
        assert!(message.contains("93 and 118"), "{message}");
    }

    #[test]
    fn query_passthrough_survives_resolution() {
        let resolved = resolve("bill/118/hr/1?offset=20&limit=50").unwrap();
        assert_eq!(resolved.params.get("offset").map(String::as_str), Some("20"));
        assert_eq!(resolved.params.get("limit").map(String::as_str), Some("50"));
    }

    #[test]
    fn law_patterns_by_arity() {
        assert_eq!(
            resolve("law/117").unwrap().request,
            TypedRequest::Law {
                congress: 117,
                law_type: None,
                number: None
            }
        );
        assert_eq!(
            resolve("law/117/public/108").unwrap().request,
            TypedRequest::Law {
                congress: 117,
                law_type: Some(crate::validation::LawType::Public),
                number: Some(108)
            }
        );
        assert_eq!(kind_of("law/117/public/108/extra"), ErrorKind::InvalidIdentifier);
    }

    #[test]
    fn congress_collection_current_keyword() {
        assert_eq!(
            resolve("congress/current").unwrap().request,
            TypedRequest::CurrentCongress
        );
        assert_eq!(
            resolve("congress/118").unwrap().request,
            TypedRequest::Congress { number: 118 }
        );
    }
}

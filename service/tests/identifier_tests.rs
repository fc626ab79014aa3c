//! End-to-end identifier resolution scenarios.

use congress_gateway_api::error::ErrorKind;
use congress_gateway_api::identifier::{resolve, request::BillSubResource, TypedRequest};
use congress_gateway_api::validation::BillType;

/// Scenario 1: a bill identifier with a sub-resource resolves into the
/// expected typed request.
#[test]
fn bill_identifier_resolves_to_typed_request() {
    let resolved = resolve("bill/118/hr/1/actions").expect("should resolve");
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

/// Scenario 2: an out-of-range congress on a nomination names the value and
/// the accepted bounds.
#[test]
fn nomination_congress_out_of_range() {
    let err = resolve("nomination/50/1").expect_err("should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    let message = err.to_string();
    assert!(message.contains("50"), "{message}");
    assert!(message.contains("93 and 118"), "{message}");
}

/// Scenario 3: an unknown state code is a parameter failure, not a shape
/// failure.
#[test]
fn unknown_state_code() {
    let err = resolve("member/state/XX").expect_err("should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(err.to_string().contains("state code"));
}

/// Scenario 4: month 13 fails date validation.
#[test]
fn bound_record_rejects_month_13() {
    let err = resolve("bound-congressional-record/2023/13/01").expect_err("should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(err.to_string().contains("month"));
}

/// Resolving the same string twice yields structurally identical requests.
#[test]
fn resolution_is_deterministic() {
    let identifiers = [
        "congress-gov://bill/118/hr/1/actions",
        "amendment/117/samdt/2137/cosponsors",
        "member/P000197",
        "member/congress/118/state/ca/district/11",
        "committee/senate/ssfr00/nominations",
        "house-vote/118/1/17/members",
        "bound-congressional-record/1990/05/02",
        "summaries/117/hr",
    ];
    for identifier in identifiers {
        assert_eq!(
            resolve(identifier).expect(identifier),
            resolve(identifier).expect(identifier),
            "{identifier}"
        );
    }
}

/// Every collection family maps onto its upstream path.
#[test]
fn upstream_paths_across_collections() {
    let cases = [
        ("bill/118/hr/1", "/bill/118/hr/1"),
        ("bill/118/hr/1/cosponsors", "/bill/118/hr/1/cosponsors"),
        ("amendment/117/hamdt/55/text", "/amendment/117/hamdt/55/text"),
        ("amendment/117/house-amendment/55", "/amendment/117/hamdt/55"),
        ("law/117", "/law/117"),
        ("law/117/public", "/law/117/pub"),
        ("law/117/priv/3", "/law/117/priv/3"),
        ("member/p000197", "/member/P000197"),
        (
            "member/P000197/sponsored-legislation",
            "/member/P000197/sponsored-legislation",
        ),
        ("member/congress/118", "/member/congress/118"),
        ("member/state/mi", "/member/MI"),
        ("member/state/mi/district/10", "/member/MI/10"),
        (
            "member/congress/118/state/mi/district/10",
            "/member/congress/118/MI/10",
        ),
        ("committee/house/hsag00", "/committee/house/hsag00"),
        (
            "committee/house/hsag00/bills",
            "/committee/house/hsag00/bills",
        ),
        (
            "committee-report/118/hrpt/5/text",
            "/committee-report/118/hrpt/5/text",
        ),
        (
            "committee-print/117/house/48144",
            "/committee-print/117/house/48144",
        ),
        (
            "committee-meeting/118/house/115538",
            "/committee-meeting/118/house/115538",
        ),
        ("hearing/116/house/41365", "/hearing/116/house/41365"),
        ("congressional-record", "/congressional-record"),
        (
            "daily-congressional-record/169/1/articles",
            "/daily-congressional-record/169/1/articles",
        ),
        (
            "bound-congressional-record/1990/5/2",
            "/bound-congressional-record/1990/05/02",
        ),
        (
            "house-communication/117/ec/3324",
            "/house-communication/117/ec/3324",
        ),
        (
            "senate-communication/117/pom/25",
            "/senate-communication/117/pom/25",
        ),
        (
            "house-requirement/8070/matching-communications",
            "/house-requirement/8070/matching-communications",
        ),
        ("house-vote/118/1/17", "/house-vote/118/1/17"),
        ("nomination/117/2467", "/nomination/117/2467"),
        ("nomination/117/2467/nominee/1", "/nomination/117/2467/1"),
        ("treaty/117/3/actions", "/treaty/117/3/actions"),
        ("crsreport/r47175", "/crsreport/R47175"),
        ("summaries/117", "/summaries/117"),
        ("summaries/117/hr", "/summaries/117/hr"),
        ("congress/118", "/congress/118"),
        ("congress/current", "/congress/current"),
    ];

    for (identifier, expected_path) in cases {
        let resolved = resolve(identifier).expect(identifier);
        assert_eq!(
            resolved.request.upstream_path(),
            expected_path,
            "{identifier}"
        );
    }
}

/// Shape failures across collections are invalid identifiers.
#[test]
fn shape_failures_are_invalid_identifier() {
    let cases = [
        "bill/118/hr",
        "bill/118/hr/1/actions/extra",
        "bill/118/hr/one",
        "amendment/117/samdt",
        "member/P000197/votes",
        "committee/house",
        "treaty/117/3/text",
        "house-requirement/8070/communications",
        "congress/118/extra",
        "unknown-collection/1/2",
    ];
    for identifier in cases {
        let err = resolve(identifier).expect_err(identifier);
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier, "{identifier}");
    }
}

/// Value failures across collections are invalid parameters.
#[test]
fn value_failures_are_invalid_parameter() {
    let cases = [
        "bill/92/hr/1",
        "bill/118/hb/1",
        "member/state/mi/district/54",
        "member/PP000197",
        "committee/assembly/hsag00",
        "committee/house/h1/bills",
        "house-communication/117/pom/25",
        "senate-communication/117/ml/25",
        "house-vote/118/0/17",
        "bound-congressional-record/1776/7/4",
    ];
    for identifier in cases {
        let err = resolve(identifier).expect_err(identifier);
        assert_eq!(err.kind(), ErrorKind::InvalidParameter, "{identifier}");
    }
}

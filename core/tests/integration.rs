//! Every endpoint exercised against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives each client
//! operation over real HTTP through the default `ureq` transport. Validates
//! that credential injection, query encoding, and status normalization work
//! end-to-end with an actual server.

use meetup_core::{
    ApiError, CategoriesQuery, EventsQuery, FailureMode, FindGroupsQuery, GroupQuery,
    MeetupClient, RsvpsQuery,
};
use mock_server::{FIXTURE_EVENT_ID, FIXTURE_GROUP};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn endpoint_round_trips() {
    let base = start_server();
    let client = MeetupClient::new(Some("fake_key"))
        .unwrap()
        .with_base_url(&base);

    // Step 1: group metadata, no optional fields requested.
    let group = client
        .get_group(FIXTURE_GROUP, &GroupQuery::default())
        .unwrap();
    assert_eq!(group["urlname"], FIXTURE_GROUP);
    assert!(group.get("past_event_count").is_none());

    // Step 2: requested fields show up in the response.
    let query = GroupQuery {
        fields: Some("past_event_count".into()),
    };
    let group = client.get_group(FIXTURE_GROUP, &query).unwrap();
    assert!(group["past_event_count"].is_u64());

    // Step 3: the full event listing.
    let events = client
        .get_events(FIXTURE_GROUP, &EventsQuery::default())
        .unwrap();
    assert_eq!(events.as_array().unwrap().len(), 3);

    // Step 4: a date window narrows the listing.
    let query = EventsQuery {
        no_earlier_than: Some("2019-04-01".to_string()),
        no_later_than: Some("2019-10-01".to_string()),
        ..EventsQuery::default()
    };
    let events = client.get_events(FIXTURE_GROUP, &query).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["local_date"], "2019-05-02");

    // Step 5: page truncates.
    let query = EventsQuery {
        page: Some(1),
        ..EventsQuery::default()
    };
    let events = client.get_events(FIXTURE_GROUP, &query).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);

    // Step 6: group search.
    let groups = client.find_groups(&FindGroupsQuery::default()).unwrap();
    assert_eq!(groups.as_array().unwrap().len(), 2);

    // Step 7: RSVPs with the default yes,no filter.
    let rsvps = client
        .get_event_rsvps(FIXTURE_GROUP, FIXTURE_EVENT_ID, &RsvpsQuery::default())
        .unwrap();
    assert_eq!(rsvps.as_array().unwrap().len(), 3);

    // Step 8: RSVPs filtered down to yes.
    let query = RsvpsQuery {
        response: Some("yes".to_string()),
    };
    let rsvps = client
        .get_event_rsvps(FIXTURE_GROUP, FIXTURE_EVENT_ID, &query)
        .unwrap();
    let rsvps = rsvps.as_array().unwrap();
    assert_eq!(rsvps.len(), 2);
    assert!(rsvps.iter().all(|r| r["response"] == "yes"));

    // Step 9: categories.
    let categories = client.get_categories(&CategoriesQuery::default()).unwrap();
    assert!(categories
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["shortname"] == "tech"));

    // Step 10: an unknown group comes back as an empty object, not an error.
    let missing = client
        .get_group("no-such-group", &GroupQuery::default())
        .unwrap();
    assert_eq!(missing, serde_json::json!({}));

    // Step 11: strict mode surfaces the status instead.
    let strict = MeetupClient::new(Some("fake_key"))
        .unwrap()
        .with_base_url(&base)
        .with_failure_mode(FailureMode::Strict);
    let err = strict
        .get_group("no-such-group", &GroupQuery::default())
        .unwrap_err();
    assert!(matches!(err, ApiError::RemoteFailure { status: 404, .. }));
}

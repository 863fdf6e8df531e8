use crate::domain::DealError;
use crate::errors::ServerError;
use crate::responses::error_response;
use crate::tests::utils::{get, post_csv, read_body, test_state, upload_dataset, LISTINGS_CSV};

#[test]
fn home_page_has_upload_form() {
    let state = test_state();
    let resp = get(&state, "/").expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Upload Property CSV"));
}

#[test]
fn upload_redirects_to_deals_with_default_filters() {
    let state = test_state();
    let resp = post_csv(&state, LISTINGS_CSV).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.starts_with("/deals?dataset="));
    assert!(location.contains("min_roi=5"));
    assert!(location.contains("min_cash_flow=0"));
}

#[test]
fn uploading_the_same_file_twice_reuses_the_dataset() {
    let state = test_state();
    let first = upload_dataset(&state, LISTINGS_CSV);
    let second = upload_dataset(&state, LISTINGS_CSV);

    assert_eq!(first, second);
    assert_eq!(state.datasets.len(), 1);
}

#[test]
fn missing_column_is_reported_as_bad_request() {
    let state = test_state();
    let err = post_csv(&state, "Address,Price (£)\n1 Main St,100000\n").unwrap_err();

    assert!(matches!(err, ServerError::Deal(DealError::MalformedInput(_))));

    let resp = error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(read_body(resp).contains("missing column"));
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let state = test_state();
    let err = post_csv(&state, "Address,Price (£),Area (m²)\n").unwrap_err();
    assert!(matches!(err, ServerError::Deal(DealError::EmptyDataset)));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let err = get(&state, "/nope").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_response(err).status(), 404);
}

use crate::errors::ServerError;
use crate::tests::utils::{get, read_body, test_state, upload_dataset, LISTINGS_CSV};

const OPEN_FILTER: &str = "min_roi=0&min_cash_flow=-500";

#[test]
fn lists_undervalued_deals_best_score_first() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    let resp = get(&state, &format!("/deals?dataset={id}&{OPEN_FILTER}")).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    assert!(body.contains("2 matching undervalued deals found"));
    // York is cheaper per m², so it scores higher and comes first.
    let york = body.find("3 Mill Lane, York").expect("York deal missing");
    let leeds = body.find("1 Main St, Leeds").expect("Leeds deal missing");
    assert!(york < leeds);
    // Not undervalued, whatever the thresholds.
    assert!(!body.contains("2 High St, Leeds"));
    assert!(!body.contains("4 Castle Rd, York"));
    assert!(body.contains("/deals/export.csv?dataset="));
}

#[test]
fn location_filter_narrows_the_table() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    let body = read_body(
        get(&state, &format!("/deals?dataset={id}&{OPEN_FILTER}&location=Leeds")).unwrap(),
    );

    assert!(body.contains("1 matching undervalued deals found"));
    assert!(body.contains("1 Main St, Leeds"));
    assert!(!body.contains("3 Mill Lane, York"));
    // Both locations stay selectable.
    assert!(body.contains("<option value=\"York\">"));
}

#[test]
fn strict_thresholds_show_the_no_match_message() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    // Simulated yields cap ROI well below 20%.
    let body = read_body(get(&state, &format!("/deals?dataset={id}&min_roi=20")).unwrap());

    assert!(body.contains("0 matching undervalued deals found"));
    assert!(body.contains("No deals matched your filters"));
}

#[test]
fn refiltering_does_not_change_the_dataset() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);
    let before = state.datasets.get(&id).unwrap();

    for qs in ["min_roi=20", OPEN_FILTER, "location=York"] {
        get(&state, &format!("/deals?dataset={id}&{qs}")).unwrap();
    }

    let after = state.datasets.get(&id).unwrap();
    assert_eq!(*before, *after);
}

#[test]
fn unknown_dataset_is_not_found() {
    let state = test_state();
    let err = get(&state, "/deals?dataset=missing").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn missing_dataset_param_is_bad_request() {
    let state = test_state();
    let err = get(&state, "/deals").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

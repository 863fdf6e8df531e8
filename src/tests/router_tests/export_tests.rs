use crate::tests::utils::{get, read_body, read_bytes, test_state, upload_dataset, LISTINGS_CSV};

#[test]
fn csv_export_is_the_filtered_table() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    let resp = get(
        &state,
        &format!("/deals/export.csv?dataset={id}&min_roi=0&min_cash_flow=-500&location=York"),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"filtered_property_deals.csv\""
    );

    let body = read_body(resp);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Address,Price (£),Area (m²),Bedrooms,"));
    assert!(lines[1].starts_with("\"3 Mill Lane, York\",90000,60,2,"));
}

#[test]
fn csv_export_keeps_uploaded_columns_and_derived_fields() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    let resp = get(
        &state,
        &format!("/deals/export.csv?dataset={id}&min_roi=0&min_cash_flow=-500"),
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    let header: Vec<&str> = body.lines().next().unwrap().split(',').collect();

    for column in [
        "Bedrooms",
        "Estimated Yield (%)",
        "Undervalued",
        "Deal Score",
        "Refinance Value (£)",
        "New Mortgage (£)",
        "Location",
    ] {
        assert!(header.contains(&column), "missing column {column}");
    }

    // The on-screen table leaves these out.
    let page = read_body(
        get(&state, &format!("/deals?dataset={id}&min_roi=0&min_cash_flow=-500"))
            .expect("Handler failed"),
    );
    assert!(!page.contains("Refinance Value"));
}

#[test]
fn xlsx_export_is_a_workbook() {
    let state = test_state();
    let id = upload_dataset(&state, LISTINGS_CSV);

    let resp = get(&state, &format!("/deals/export.xlsx?dataset={id}")).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"filtered_property_deals.xlsx\""
    );
    assert_eq!(&read_bytes(resp)[..2], b"PK");
}

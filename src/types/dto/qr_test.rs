use crate::api::helpers::bad_request;
use crate::types::dto::qr::{BatchQrResponse, QrCodeDto};

#[test]
fn test_batch_response_wire_shape() {
    let response = BatchQrResponse {
        qr_codes: vec![QrCodeDto {
            id: 1,
            name: "Widget".to_string(),
            qr_code: "aGVsbG8=".to_string(),
        }],
    };

    let value = serde_json::to_value(&response).unwrap();
    let codes = value["qr_codes"].as_array().unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0]["id"], 1);
    assert_eq!(codes[0]["name"], "Widget");
    assert_eq!(codes[0]["qr_code"], "aGVsbG8=");
}

#[test]
fn test_empty_selection_error_wire_shape() {
    let value = serde_json::to_value(bad_request("No products selected")).unwrap();

    assert_eq!(value["error"], "invalid_input");
    assert_eq!(value["message"], "No products selected");
    assert_eq!(value["status_code"], 400);
}

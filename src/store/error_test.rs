use super::error::StoreError;

#[test]
fn not_found_message_names_the_page() {
    let err = StoreError::NotFound {
        id: "nonexistent".to_string(),
    };
    assert_eq!(err.to_string(), "Page with ID nonexistent not found");
}

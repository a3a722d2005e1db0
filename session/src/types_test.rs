use super::*;

fn make_user() -> User {
    User {
        id: 2,
        email: "user@example.com".to_owned(),
        first_name: "King".to_owned(),
        last_name: "Joshua".to_owned(),
        role: Role::User,
        password: String::new(),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_claim_defaults_to_user() {
    assert_eq!(Role::from_claim(None), Role::User);
    assert_eq!(Role::from_claim(Some("")), Role::User);
    assert_eq!(Role::from_claim(Some("Superuser")), Role::User);
}

#[test]
fn role_from_claim_accepts_admin_in_any_case() {
    assert_eq!(Role::from_claim(Some("Admin")), Role::Admin);
    assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
    assert_eq!(Role::from_claim(Some(" ADMIN ")), Role::Admin);
}

#[test]
fn role_serializes_as_variant_name() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"User\"");
    assert_eq!(Role::Admin.to_string(), "Admin");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_password_is_never_serialized() {
    let mut user = make_user();
    user.password = "hunter2".to_owned();
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn user_display_name_falls_back_to_email() {
    let mut user = make_user();
    assert_eq!(user.display_name(), "King");
    user.first_name = "  ".to_owned();
    assert_eq!(user.display_name(), "user@example.com");
}

#[test]
fn user_full_name_trims_missing_halves() {
    let mut user = make_user();
    assert_eq!(user.full_name(), "King Joshua");
    user.last_name.clear();
    assert_eq!(user.full_name(), "King");
}

// =============================================================
// Wire DTOs
// =============================================================

#[test]
fn token_response_accepts_access_token_field() {
    let body = serde_json::json!({
        "access_token": "a.b.c",
        "message": "Login successful",
        "token_type": "Bearer"
    });
    let resp: TokenResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.access_token, "a.b.c");
    assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
}

#[test]
fn token_response_accepts_legacy_token_field() {
    let resp: TokenResponse = serde_json::from_value(serde_json::json!({ "token": "x.y.z" })).unwrap();
    assert_eq!(resp.access_token, "x.y.z");
    assert_eq!(resp.message, None);
}

#[test]
fn user_listing_tolerates_missing_users() {
    let listing: UserListing = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(listing.users.is_empty());
    assert_eq!(listing.total(), 0);
}

#[test]
fn user_listing_parses_rows_and_count() {
    let body = serde_json::json!({
        "user_count": 2,
        "users": [
            { "id": 1, "email": "admin@example.com", "first_name": "Nyengka", "last_name": "Prosper", "role": "Admin" },
            { "id": 2, "email": "user@example.com", "first_name": "King", "last_name": "Joshua", "role": "User" }
        ]
    });
    let listing: UserListing = serde_json::from_value(body).unwrap();
    assert_eq!(listing.total(), 2);
    assert_eq!(listing.users[0].role, Role::Admin);
    assert_eq!(listing.users[1].full_name(), "King Joshua");
}
